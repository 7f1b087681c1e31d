use std::fmt::Write;

use crate::config::HighlightStyle;
use crate::fixtures::Outcome;
use crate::table::DisplayTable;
use crate::widget::{LeagueSection, MatchCard, MatchLine, Summary, Widget};

/// Plain-text rendering of the widget for terminals.
pub fn render(widget: &Widget) -> String {
    match widget {
        Widget::ConnectionRequired { message } => format!("{message}\n"),
        Widget::Ready(summary) => render_summary(summary),
    }
}

fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", summary.team.to_uppercase());
    if summary.stale {
        out.push_str(" (offline)");
    }
    out.push('\n');

    if let Some(previous) = &summary.previous {
        out.push('\n');
        render_card(&mut out, previous);
    }
    if let Some(next) = &summary.next {
        let _ = writeln!(out, "\n{}", summary.next_title.to_uppercase());
        render_card(&mut out, next);
    }
    if let Some(league) = &summary.league {
        out.push('\n');
        render_league(&mut out, league, summary.highlight);
    }
    out
}

fn render_card(out: &mut String, card: &MatchCard) {
    let view = match card {
        MatchCard::Empty { message } => {
            let _ = writeln!(out, "  {message}");
            return;
        }
        MatchCard::Match(view) => view,
    };

    let marker = match view.outcome {
        Outcome::Upcoming => "·",
        Outcome::Win => "W",
        Outcome::Draw => "D",
        Outcome::Loss => "L",
    };
    let _ = writeln!(
        out,
        "{marker} {}",
        view.competition.as_deref().unwrap_or_default()
    );
    let _ = writeln!(out, "  {} - {}", view.home, view.away);

    let line = match &view.line {
        MatchLine::Kickoff { date, time } => [date.as_deref(), time.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" "),
        MatchLine::Score { score } => score.clone(),
        MatchLine::Status { label } => label.clone(),
    };
    let _ = write!(out, "  {line}");
    if view.live {
        out.push_str(" ●");
        if let Some(clock) = &view.live_clock {
            let _ = write!(out, " {clock}");
        }
    }
    out.push('\n');
}

fn render_league(out: &mut String, league: &LeagueSection, style: HighlightStyle) {
    let _ = writeln!(out, "{}", league.title.to_uppercase());
    render_table(out, &league.table, style);
}

fn render_table(out: &mut String, table: &DisplayTable, style: HighlightStyle) {
    let h = table.header;
    let _ = writeln!(
        out,
        "{:>4}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4}",
        h.rank, h.team, h.played, h.wins, h.draws, h.losses, h.points
    );
    let highlighted = table.highlighted_row().map(|row| row.rank);
    for row in &table.rows {
        let rank = if highlighted == Some(row.rank) {
            match style {
                HighlightStyle::Circle => format!("({})", row.rank),
                HighlightStyle::Bold => format!("*{}", row.rank),
            }
        } else {
            row.rank.to_string()
        };
        let _ = writeln!(
            out,
            "{:>4}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4}",
            rank, row.name, row.played, row.wins, row.draws, row.losses, row.points
        );
    }
}
