use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::client::Client;
use crate::error::Error;
use crate::store::{CacheKey, FileStore, Store};
use crate::types::{MatchDetails, TeamOverview};

/// Outcome of a cache-backed fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fetched<T> {
    /// Retrieved live; the cache entry was overwritten.
    Fresh(T),
    /// Live retrieval failed; served from the last known good entry.
    Cached(T),
    /// Neither the network nor the cache had a usable payload.
    Unavailable,
}

impl<T> Fetched<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Fetched::Fresh(value) | Fetched::Cached(value) => Some(value),
            Fetched::Unavailable => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Fetched::Cached(_))
    }
}

/// A decoded image payload. The raw bytes are kept for the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Image {
    pub fn decode(raw: &[u8]) -> Result<Self, Error> {
        let decoded = image::load_from_memory(raw)?;
        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            bytes: raw.to_vec(),
        })
    }
}

/// Which of the two displayed fixtures a match-details payload belongs to.
/// The cache holds one entry per slot rather than per match id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixtureSlot {
    Previous,
    Next,
}

impl FixtureSlot {
    fn cache_key(self) -> CacheKey {
        match self {
            FixtureSlot::Previous => CacheKey::MatchPrevious,
            FixtureSlot::Next => CacheKey::MatchNext,
        }
    }
}

pub struct CachedClient<C, S = FileStore> {
    api_client: C,
    store: S,
}

impl<C: Client + Sync, S: Store + Sync> CachedClient<C, S> {
    pub fn new(api_client: C, store: S) -> Self {
        Self { api_client, store }
    }

    #[cfg(test)]
    pub(crate) fn api_client(&self) -> &C {
        &self.api_client
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub async fn team_overview(&self, team_id: u32, time_zone: &str) -> Fetched<TeamOverview> {
        self.fetch(
            CacheKey::TeamOverview,
            self.api_client.fetch_team_overview(team_id, time_zone),
            decode_json,
        )
        .await
    }

    /// A slot's cache entry is only served for the fixture it was fetched
    /// for; once the slot has moved on to another match it counts as a miss.
    pub async fn match_details(&self, slot: FixtureSlot, match_id: u64) -> Fetched<MatchDetails> {
        let fetched: Fetched<MatchDetails> = self
            .fetch(
                slot.cache_key(),
                self.api_client.fetch_match_details(match_id),
                decode_json,
            )
            .await;
        match fetched {
            Fetched::Cached(details) if details.match_id() != Some(match_id) => {
                warn!(
                    match_id,
                    cached_id = ?details.match_id(),
                    "cached match details belong to another fixture"
                );
                Fetched::Unavailable
            }
            fetched => fetched,
        }
    }

    /// Badge for the team shown on row `position` of the table window.
    pub async fn badge(&self, position: usize, team_id: u32) -> Fetched<Image> {
        self.fetch(
            CacheKey::Badge(position),
            self.api_client.fetch_team_badge(team_id),
            Image::decode,
        )
        .await
    }

    /// User-supplied background image. Only ever read locally.
    pub async fn background(&self) -> Option<Image> {
        let name = CacheKey::Background.file_name();
        match self.read_cached(&name, Image::decode).await {
            Ok(image) => Some(image),
            Err(e) => {
                debug!(error = %e, "no background image");
                None
            }
        }
    }

    /// Tries the network first. On success the raw payload overwrites the
    /// cache entry; on any failure the cache entry is decoded instead.
    async fn fetch<T, Fut, D>(&self, key: CacheKey, live: Fut, decode: D) -> Fetched<T>
    where
        Fut: Future<Output = Result<Vec<u8>, Error>>,
        D: Fn(&[u8]) -> Result<T, Error>,
    {
        let name = key.file_name();
        let fetched = match live.await {
            Ok(raw) => decode(&raw).map(|value| (raw, value)),
            Err(e) => Err(e),
        };

        match fetched {
            Ok((raw, value)) => {
                if let Err(e) = self.store.write(&name, &raw).await {
                    warn!(key = %name, error = %e, "failed to write cache entry");
                }
                debug!(key = %name, "fetched live data");
                Fetched::Fresh(value)
            }
            Err(e) => {
                warn!(key = %name, error = %e, "live fetch failed, trying cached data");
                match self.read_cached(&name, decode).await {
                    Ok(value) => Fetched::Cached(value),
                    Err(e) => {
                        warn!(key = %name, error = %e, "no cached data");
                        Fetched::Unavailable
                    }
                }
            }
        }
    }

    async fn read_cached<T, D>(&self, name: &str, decode: D) -> Result<T, Error>
    where
        D: Fn(&[u8]) -> Result<T, Error>,
    {
        self.store.materialize(name).await?;
        let raw = self.store.read(name).await?;
        decode(&raw)
    }
}

impl<C> CachedClient<C, FileStore> {
    pub fn clear(&self) -> Result<(), Error> {
        self.store.clear()
    }
}

fn decode_json<T: DeserializeOwned>(raw: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice(raw)?)
}
