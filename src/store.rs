use std::fs;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

use crate::error::{Error, IOError};

/// Persistent key-value store for "last known good" payloads.
#[async_trait]
pub trait Store {
    /// Makes the entry locally readable. A failure here counts as a miss.
    async fn materialize(&self, key: &str) -> Result<(), Error>;
    async fn read(&self, key: &str) -> Result<Vec<u8>, Error>;
    async fn write(&self, key: &str, payload: &[u8]) -> Result<(), Error>;
}

/// One file per key under a base directory; keys are file names (see [`CacheKey`]).
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// A directory that cannot be created leaves the store usable: reads
    /// miss and writes fail, both of which callers already tolerate.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let base_path = base_path.into();
        if let Err(e) = fs::create_dir_all(&base_path) {
            warn!(path = %base_path.display(), error = %e, "cannot create cache directory");
        }
        Self { base_path }
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    pub fn clear(&self) -> Result<(), Error> {
        match fs::remove_dir_all(&self.base_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(IOError::new(&self.base_path, e).into()),
        }
    }
}

#[async_trait]
impl Store for FileStore {
    async fn materialize(&self, key: &str) -> Result<(), Error> {
        let path = self.path(key);
        if path.is_file() {
            Ok(())
        } else {
            Err(Error::CacheMiss(key.to_string()))
        }
    }

    async fn read(&self, key: &str) -> Result<Vec<u8>, Error> {
        let path = self.path(key);
        Ok(fs::read(&path).map_err(|e| IOError::new(&path, e))?)
    }

    // write to a sibling then rename, so overlapping runs never see a torn file
    async fn write(&self, key: &str, payload: &[u8]) -> Result<(), Error> {
        let path = self.path(key);
        fs::create_dir_all(&self.base_path).map_err(|e| IOError::new(&self.base_path, e))?;
        let tmp = self.base_path.join(format!(".{key}.tmp"));
        fs::write(&tmp, payload).map_err(|e| IOError::new(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| IOError::new(&path, e))?;
        Ok(())
    }
}

/// Logical cache entries and their file names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheKey {
    TeamOverview,
    MatchPrevious,
    MatchNext,
    /// Badge for the n-th row (1-based) of the displayed table window.
    Badge(usize),
    Background,
    Settings,
}

impl CacheKey {
    pub fn file_name(&self) -> String {
        match self {
            CacheKey::TeamOverview => "teamOverview.json".into(),
            CacheKey::MatchPrevious => "matchPrevious.json".into(),
            CacheKey::MatchNext => "matchNext.json".into(),
            CacheKey::Badge(n) => format!("badge_{n}.png"),
            CacheKey::Background => "background.png".into(),
            CacheKey::Settings => "userSettings.json".into(),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("futcal-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}
