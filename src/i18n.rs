use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pt,
    Fr,
    De,
}

impl Language {
    /// Parses a locale tag such as `pt-BR`, `fr_FR.UTF-8` or `de`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(|c| c == '-' || c == '_' || c == '.')
            .next()?
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "pt" => Some(Language::Pt),
            "fr" => Some(Language::Fr),
            "de" => Some(Language::De),
            _ => None,
        }
    }

    /// Language of the current process locale, English when unsupported.
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .and_then(|tag| Self::from_tag(&tag))
            .unwrap_or(Language::En)
    }

    pub fn dictionary(self) -> &'static Dictionary {
        match self {
            Language::En => &EN,
            Language::Pt => &PT,
            Language::Fr => &FR,
            Language::De => &DE,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TableHeader {
    pub rank: &'static str,
    pub team: &'static str,
    pub played: &'static str,
    pub wins: &'static str,
    pub draws: &'static str,
    pub losses: &'static str,
    pub points: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Dictionary {
    pub champions_league: &'static str,
    pub champions_league_qualification: &'static str,
    pub europa_league: &'static str,
    pub europa_league_qualification: &'static str,
    pub uefa_super_cup: &'static str,
    pub cup: &'static str,
    pub league_cup: &'static str,
    pub super_cup: &'static str,
    pub quarter_final: &'static str,
    pub semi_final: &'static str,
    pub final_: &'static str,
    pub postponed: &'static str,
    pub cancelled: &'static str,
    pub abandoned: &'static str,
    pub match_title_next: &'static str,
    pub match_round: &'static str,
    pub match_date_today: &'static str,
    pub match_date_tomorrow: &'static str,
    pub no_matches: &'static str,
    pub connection_required: &'static str,
    pub months: [&'static str; 12],
    pub table_header: TableHeader,
}

pub static EN: Dictionary = Dictionary {
    champions_league: "Champions League",
    champions_league_qualification: "Champions League Q.",
    europa_league: "Europa League",
    europa_league_qualification: "Europa League Q.",
    uefa_super_cup: "UEFA Super Cup",
    cup: "Cup",
    league_cup: "League Cup",
    super_cup: "Super Cup",
    quarter_final: "QF",
    semi_final: "SF",
    final_: "F",
    postponed: "Postponed",
    cancelled: "Cancelled",
    abandoned: "Abandoned",
    match_title_next: "Next",
    match_round: "R",
    match_date_today: "Today",
    match_date_tomorrow: "Tomorrow",
    no_matches: "No matches available",
    connection_required: "Connection required",
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    table_header: TableHeader {
        rank: "#",
        team: "T",
        played: "M",
        wins: "W",
        draws: "D",
        losses: "L",
        points: "P",
    },
};

pub static PT: Dictionary = Dictionary {
    champions_league: "Liga Campeões",
    champions_league_qualification: "Q. Liga Campeões",
    europa_league: "Liga Europa",
    europa_league_qualification: "Q. Liga Europa",
    uefa_super_cup: "Supertaça Europeia",
    cup: "Taça",
    league_cup: "Taça Liga",
    super_cup: "Supertaça",
    quarter_final: "QF",
    semi_final: "MF",
    final_: "F",
    postponed: "Adiado",
    cancelled: "Cancelado",
    abandoned: "Interrompido",
    match_title_next: "Próximo",
    match_round: "J",
    match_date_today: "Hoje",
    match_date_tomorrow: "Amanhã",
    no_matches: "Sem jogos disponíveis",
    connection_required: "Ligação necessária",
    months: [
        "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    ],
    table_header: TableHeader {
        rank: "#",
        team: "E",
        played: "J",
        wins: "V",
        draws: "E",
        losses: "D",
        points: "P",
    },
};

pub static FR: Dictionary = Dictionary {
    champions_league: "Ligue Champions",
    champions_league_qualification: "Q. Ligue Champions",
    europa_league: "Ligue Europa",
    europa_league_qualification: "Q. Ligue Europa",
    uefa_super_cup: "Supercoupe d'Europe",
    cup: "Coupe",
    league_cup: "League Cup",
    super_cup: "Supercoupe",
    quarter_final: "QF",
    semi_final: "DF",
    final_: "F",
    postponed: "Reporté",
    cancelled: "Annulé",
    abandoned: "Arrêté",
    match_title_next: "Suivant",
    match_round: "J",
    match_date_today: "Aujourd'hui",
    match_date_tomorrow: "Demain",
    no_matches: "Aucun match disponible",
    connection_required: "Connexion requise",
    months: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    table_header: TableHeader {
        rank: "#",
        team: "C",
        played: "M",
        wins: "G",
        draws: "N",
        losses: "P",
        points: "PT",
    },
};

pub static DE: Dictionary = Dictionary {
    champions_league: "Champions League",
    champions_league_qualification: "Champions League Q.",
    europa_league: "Europa League",
    europa_league_qualification: "Europa League Q.",
    uefa_super_cup: "UEFA Supercup",
    cup: "DFB-Pokal",
    league_cup: "Ligapokal",
    super_cup: "Supercup",
    quarter_final: "VF",
    semi_final: "HF",
    final_: "F",
    postponed: "Verschoben",
    cancelled: "Abgesagt",
    abandoned: "Abgebrochen",
    match_title_next: "Nächstes",
    match_round: "S",
    match_date_today: "Heute",
    match_date_tomorrow: "Morgen",
    no_matches: "Keine Spiele verfügbar",
    connection_required: "Verbindung erforderlich",
    months: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    table_header: TableHeader {
        rank: "#",
        team: "M",
        played: "S",
        wins: "G",
        draws: "U",
        losses: "V",
        points: "P",
    },
};

impl Dictionary {
    /// Translates or shortens a label coming from the API: exact matches
    /// first, then the competition substring rules, else the label itself.
    pub fn resolve(&self, text: &str) -> String {
        if let Some(label) = self.exact(text) {
            label.to_string()
        } else if text.contains("Champions League") {
            self.champions_league.to_string()
        } else if text.contains("Europa League") {
            self.europa_league.to_string()
        } else if text.contains("UEFA Super Cup") {
            self.uefa_super_cup.to_string()
        } else {
            text.to_string()
        }
    }

    fn exact(&self, text: &str) -> Option<&'static str> {
        let label = match text {
            // competitions
            "Champions League Qualification" => self.champions_league_qualification,
            "Europa League Qualification" => self.europa_league_qualification,
            "Cup" => self.cup,
            "League Cup" => self.league_cup,
            "Super Cup" => self.super_cup,
            // rounds
            "Quarter-Final" => self.quarter_final,
            "Semi-Final" => self.semi_final,
            "Final" => self.final_,
            // match status reasons
            "Postponed" => self.postponed,
            "Cancelled" => self.cancelled,
            "Abandoned" => self.abandoned,
            // team names that do not fit the widget
            "Sporting CP" => "Sporting",
            "Famalicao" => "Famalicão",
            "Pacos de Ferreira" => "P. Ferreira",
            "Vitoria de Guimaraes" => "V. Guimarães",
            "Belenenses SAD" => "Belenenses",
            "FC Porto" => "Porto",
            _ => return None,
        };
        Some(label)
    }

    /// `Round of 16` becomes `1/16`, `Round 7` becomes e.g. `R7`.
    pub fn shorten_round(&self, round: &str) -> String {
        if let Some((_, n)) = round.split_once("Round of ") {
            format!("1/{n}")
        } else if let Some((_, n)) = round.split_once("Round ") {
            format!("{}{n}", self.match_round)
        } else {
            round.to_string()
        }
    }

    /// Formats a `League - Round` tournament string for display.
    pub fn league_round_label(&self, text: &str, show_round: bool) -> String {
        let text = text.split(' ').filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ");
        let (league, round) = match text.split_once(" - ") {
            Some((league, round)) => (league, Some(round)),
            None => (text.as_str(), None),
        };
        let league = self.resolve(league);
        match round {
            Some(round) if show_round => {
                format!("{league} ({})", self.resolve(&self.shorten_round(round)))
            }
            _ => league,
        }
    }

    pub fn match_date_label(&self, date: NaiveDate, today: NaiveDate) -> String {
        if date == today {
            self.match_date_today.to_string()
        } else if today.succ_opt() == Some(date) {
            self.match_date_tomorrow.to_string()
        } else {
            format!("{:02}/{}", date.day(), self.months[date.month0() as usize])
        }
    }
}

/// Kickoff time as given by the API (`HH:MM`), optionally on a 12-hour clock.
pub fn start_time_label(time: &str, twelve_hour: bool) -> String {
    if !twelve_hour {
        return time.to_string();
    }
    match NaiveTime::parse_from_str(time.trim(), "%H:%M") {
        Ok(parsed) => parsed.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}
