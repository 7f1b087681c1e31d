use async_trait::async_trait;

use crate::error::Error;

/// Raw upstream access. Implementations return the response body untouched
/// so the cache can persist exactly what was retrieved.
#[async_trait]
pub trait Client {
    async fn fetch_team_overview(&self, team_id: u32, time_zone: &str) -> Result<Vec<u8>, Error>;
    async fn fetch_match_details(&self, match_id: u64) -> Result<Vec<u8>, Error>;
    async fn fetch_team_badge(&self, team_id: u32) -> Result<Vec<u8>, Error>;
}
