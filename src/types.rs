use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamOverview {
    pub details: Team,
    #[serde(default)]
    pub table_data: TableData,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
}

impl TeamOverview {
    /// The team's domestic league, listed first by the API.
    pub fn league(&self) -> Option<&LeagueTable> {
        self.table_data.tables.first()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub tables: Vec<LeagueTable>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueTable {
    pub league_name: String,
    #[serde(default)]
    pub page_url: String,
    #[serde(default)]
    pub table: Vec<LeagueTableRow>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub idx: u32,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub pts: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: u64,
    #[serde(default)]
    pub page_url: String,
    pub home: Side,
    pub away: Side,
    #[serde(default)]
    pub not_started: bool,
    #[serde(default)]
    pub status: FixtureStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub score: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureStatus {
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub started: bool,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub start_time_str: Option<String>,
    #[serde(default)]
    pub reason: Option<Reason>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub short: String,
    #[serde(default)]
    pub long: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    #[serde(default)]
    pub general: MatchGeneral,
    pub header: MatchHeader,
    pub content: MatchContent,
}

impl MatchDetails {
    pub fn match_id(&self) -> Option<u64> {
        self.general.match_id.as_ref().and_then(MatchId::value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchGeneral {
    #[serde(default)]
    pub match_id: Option<MatchId>,
}

/// The API sends match ids as strings here and as numbers elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchId {
    Number(u64),
    Text(String),
}

impl MatchId {
    pub fn value(&self) -> Option<u64> {
        match self {
            MatchId::Number(id) => Some(*id),
            MatchId::Text(id) => id.trim().parse().ok(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHeader {
    pub status: MatchStatus,
    #[serde(default)]
    pub teams: Vec<MatchTeam>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatus {
    #[serde(default)]
    pub started: bool,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub score_str: Option<String>,
    #[serde(default)]
    pub live_time: Option<LiveTime>,
    #[serde(default)]
    pub reason: Option<Reason>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveTime {
    pub short: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTeam {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub score: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchContent {
    pub match_facts: MatchFacts,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFacts {
    pub info_box: InfoBox,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoBox {
    #[serde(rename = "Tournament")]
    pub tournament: Tournament,
    #[serde(rename = "Match Date", default)]
    pub match_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub text: String,
}
