use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::cached_client::{CachedClient, FixtureSlot, Image};
use crate::client::Client;
use crate::config::{Colors, Config, HighlightStyle, Settings, View};
use crate::fixtures::{is_live, FixturePair, Outcome};
use crate::i18n::{start_time_label, Dictionary};
use crate::store::Store;
use crate::table::{DisplayTable, WINDOW_SIZE};
use crate::types::{Fixture, LeagueTable, MatchDetails};

/// Everything the host needs to draw the widget.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Widget {
    Ready(Summary),
    /// Neither the API nor the cache had team data.
    ConnectionRequired { message: &'static str },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub team: String,
    /// Some of the data came from the offline cache.
    pub stale: bool,
    pub view: View,
    pub highlight: HighlightStyle,
    pub colors: Colors,
    pub background: Option<Image>,
    pub previous: Option<MatchCard>,
    pub next_title: &'static str,
    pub next: Option<MatchCard>,
    pub league: Option<LeagueSection>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MatchCard {
    Match(MatchView),
    Empty { message: &'static str },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub url: String,
    pub competition: Option<String>,
    pub home: String,
    pub away: String,
    pub outcome: Outcome,
    pub line: MatchLine,
    pub live: bool,
    pub live_clock: Option<String>,
}

/// The third line of a match card.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MatchLine {
    Kickoff {
        date: Option<String>,
        time: Option<String>,
    },
    Score {
        score: String,
    },
    Status {
        label: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSection {
    pub title: String,
    pub url: String,
    pub table: DisplayTable,
    /// One entry per table row, empty when badges are disabled.
    pub badges: Vec<Option<Image>>,
}

/// Builds the widget model: team data, then each fixture's details, then
/// the table window and its badges, one request at a time.
#[instrument(skip_all, fields(team_id = config.settings.team_id))]
pub async fn build<C, S>(client: &CachedClient<C, S>, config: &Config, today: NaiveDate) -> Widget
where
    C: Client + Sync,
    S: Store + Sync,
{
    let settings = &config.settings;
    let dictionary = settings.language.resolve().dictionary();

    let fetched = client
        .team_overview(settings.team_id, &settings.time_zone)
        .await;
    let mut stale = fetched.is_stale();
    let Some(overview) = fetched.into_option() else {
        warn!("no team data available");
        return Widget::ConnectionRequired {
            message: dictionary.connection_required,
        };
    };

    let builder = Builder {
        settings,
        dictionary,
        base_url: &config.api_url,
        today,
    };

    let (previous, next) = if settings.view == View::Table {
        (None, None)
    } else {
        let pair = FixturePair::select(&overview.fixtures);
        let previous = builder
            .fetch_card(client, FixtureSlot::Previous, pair.previous, &mut stale)
            .await;
        let next = builder
            .fetch_card(client, FixtureSlot::Next, pair.next, &mut stale)
            .await;
        (Some(previous), Some(next))
    };

    let league = match (settings.view, overview.league()) {
        (View::Matches, _) => None,
        (_, None) => {
            info!("team has no league table");
            None
        }
        (_, Some(league)) => {
            let mut section = builder.league_section(league);
            if settings.show_badges {
                for (i, row) in section.table.rows.iter().enumerate() {
                    let badge = client.badge(i + 1, row.team_id).await;
                    stale |= badge.is_stale();
                    section.badges.push(badge.into_option());
                }
            }
            Some(section)
        }
    };

    Widget::Ready(Summary {
        team: dictionary.resolve(&overview.details.name),
        stale,
        view: settings.view,
        highlight: settings.highlight,
        colors: settings.colors.clone(),
        background: client.background().await,
        previous,
        next_title: dictionary.match_title_next,
        next,
        league,
    })
}

struct Builder<'a> {
    settings: &'a Settings,
    dictionary: &'static Dictionary,
    base_url: &'a str,
    today: NaiveDate,
}

impl Builder<'_> {
    async fn fetch_card<C, S>(
        &self,
        client: &CachedClient<C, S>,
        slot: FixtureSlot,
        fixture: Option<&Fixture>,
        stale: &mut bool,
    ) -> MatchCard
    where
        C: Client + Sync,
        S: Store + Sync,
    {
        let Some(fixture) = fixture else {
            return MatchCard::Empty {
                message: self.dictionary.no_matches,
            };
        };
        let details = client.match_details(slot, fixture.id).await;
        *stale |= details.is_stale();
        self.match_card(fixture, details.into_option().as_ref())
    }

    fn match_card(&self, fixture: &Fixture, details: Option<&MatchDetails>) -> MatchCard {
        let dictionary = self.dictionary;
        let live = details.map(is_live).unwrap_or(false);
        let live_clock = details
            .filter(|_| live && self.settings.show_live_clock)
            .and_then(|d| d.header.status.live_time.as_ref())
            .map(|t| t.short.clone());

        MatchCard::Match(MatchView {
            url: format!("{}{}", self.base_url, fixture.page_url),
            competition: details.map(|d| {
                dictionary.league_round_label(
                    &d.content.match_facts.info_box.tournament.text,
                    self.settings.show_round,
                )
            }),
            home: dictionary.resolve(&fixture.home.name),
            away: dictionary.resolve(&fixture.away.name),
            outcome: Outcome::of(fixture, details, self.settings.team_id),
            line: self.match_line(fixture, details),
            live,
            live_clock,
        })
    }

    fn match_line(&self, fixture: &Fixture, details: Option<&MatchDetails>) -> MatchLine {
        let status = details.map(|d| &d.header.status);
        let started = status.map(|s| s.started).unwrap_or(fixture.status.started);

        if started {
            let score = status
                .and_then(|s| s.score_str.clone())
                .or_else(|| match (fixture.home.score, fixture.away.score) {
                    (Some(home), Some(away)) => Some(format!("{home} - {away}")),
                    _ => None,
                })
                .unwrap_or_default();
            return MatchLine::Score { score };
        }

        let reason = status
            .and_then(|s| s.reason.as_ref())
            .or(fixture.status.reason.as_ref());
        let cancelled = status.map(|s| s.cancelled).unwrap_or(false) || fixture.status.cancelled;
        if let Some(reason) = reason {
            return MatchLine::Status {
                label: self.dictionary.resolve(&reason.short),
            };
        }
        if cancelled {
            return MatchLine::Status {
                label: self.dictionary.cancelled.to_string(),
            };
        }

        let date = details
            .and_then(|d| d.content.match_facts.info_box.match_date.as_deref())
            .and_then(parse_match_date)
            .map(|date| self.dictionary.match_date_label(date, self.today));
        let time = fixture
            .status
            .start_time_str
            .as_deref()
            .map(|time| start_time_label(time, self.settings.twelve_hour_clock));
        MatchLine::Kickoff { date, time }
    }

    fn league_section(&self, league: &LeagueTable) -> LeagueSection {
        let table = DisplayTable::build(
            &league.table,
            self.settings.team_id,
            WINDOW_SIZE,
            &self.dictionary.table_header,
        );
        LeagueSection {
            title: league.league_name.clone(),
            url: format!(
                "{}{}",
                self.base_url,
                league.page_url.replace("overview", "table")
            ),
            table,
            badges: Vec::new(),
        }
    }
}

/// The API sends either an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
fn parse_match_date(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok())
}
