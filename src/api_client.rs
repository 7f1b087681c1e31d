use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tokio_retry::{
    strategy::{jitter, ExponentialBackoff},
    RetryIf,
};
use tracing::{debug, instrument};

use crate::client::Client;
use crate::error::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.fotmob.com";

const TEAM_OVERVIEW_PATH: &str = "/api/teams";
const MATCH_DETAILS_PATH: &str = "/api/matchDetails";

pub struct FotMobClient {
    client: reqwest::Client,
    base_url: String,
}

impl FotMobClient {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Vec<u8>, Error> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = response.bytes().await?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }

    async fn team_overview(&self, team_id: u32, time_zone: &str) -> Result<Vec<u8>, Error> {
        let url = format!("{}{TEAM_OVERVIEW_PATH}", self.base_url);
        let query = [
            ("id", team_id.to_string()),
            ("tab", "overview".to_string()),
            ("type", "team".to_string()),
            ("timeZone", time_zone.to_string()),
        ];
        self.get(&url, &query).await
    }

    async fn match_details(&self, match_id: u64) -> Result<Vec<u8>, Error> {
        let url = format!("{}{MATCH_DETAILS_PATH}", self.base_url);
        self.get(&url, &[("matchId", match_id.to_string())]).await
    }

    async fn team_badge(&self, team_id: u32) -> Result<Vec<u8>, Error> {
        let url = format!("{}/images/team/{team_id}_xsmall", self.base_url);
        self.get(&url, &[]).await
    }
}

fn retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(20).map(jitter).take(3)
}

/// Transport errors and 5xx responses; a 4xx will not change on retry.
fn is_transient(error: &Error) -> bool {
    match error {
        Error::Request(_) => true,
        Error::Status { status, .. } => status.is_server_error(),
        _ => false,
    }
}

#[async_trait]
impl Client for FotMobClient {
    #[instrument(skip(self))]
    async fn fetch_team_overview(&self, team_id: u32, time_zone: &str) -> Result<Vec<u8>, Error> {
        RetryIf::spawn(
            retry_strategy(),
            || self.team_overview(team_id, time_zone),
            is_transient,
        )
        .await
    }
    #[instrument(skip(self))]
    async fn fetch_match_details(&self, match_id: u64) -> Result<Vec<u8>, Error> {
        RetryIf::spawn(retry_strategy(), || self.match_details(match_id), is_transient).await
    }
    #[instrument(skip(self))]
    async fn fetch_team_badge(&self, team_id: u32) -> Result<Vec<u8>, Error> {
        RetryIf::spawn(retry_strategy(), || self.team_badge(team_id), is_transient).await
    }
}
