use serde::Serialize;

use crate::types::{Fixture, MatchDetails};

/// The two fixtures the widget shows.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FixturePair<'a> {
    pub previous: Option<&'a Fixture>,
    pub next: Option<&'a Fixture>,
}

impl<'a> FixturePair<'a> {
    /// `fixtures` is the team's season in chronological order. The next
    /// fixture is the first one not yet started and not cancelled; the
    /// previous is the entry right before it, or the last of the season
    /// once there is no next fixture.
    pub fn select(fixtures: &'a [Fixture]) -> Self {
        let next_index = fixtures
            .iter()
            .position(|fixture| fixture.not_started && !fixture.status.cancelled);

        match next_index {
            Some(i) => Self {
                previous: i.checked_sub(1).and_then(|p| fixtures.get(p)),
                next: fixtures.get(i),
            },
            None => Self {
                previous: fixtures.last(),
                next: None,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Upcoming,
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Result of `fixture` from the point of view of `team_id`. Scores come
    /// from the match header when details are available, else from the
    /// fixture list.
    pub fn of(fixture: &Fixture, details: Option<&MatchDetails>, team_id: u32) -> Self {
        let started = details
            .map(|d| d.header.status.started)
            .unwrap_or(fixture.status.started);
        if !started {
            return Outcome::Upcoming;
        }
        let score = |i: usize| {
            details
                .and_then(|d| d.header.teams.get(i))
                .and_then(|team| team.score)
        };
        let home = score(0).or(fixture.home.score).unwrap_or(0);
        let away = score(1).or(fixture.away.score).unwrap_or(0);

        if home == away {
            Outcome::Draw
        } else if (home > away && fixture.home.id == team_id)
            || (home < away && fixture.away.id == team_id)
        {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

pub fn is_live(details: &MatchDetails) -> bool {
    details.header.status.started && !details.header.status.finished
}
