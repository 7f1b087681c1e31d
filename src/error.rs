#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("IO error: {0}")]
    Io(#[from] IOError),

    #[error("JSON serialization error: {0}")]
    JSON(#[from] JSONError),

    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("cache entry not found: {0}")]
    CacheMiss(String),
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({})", file.display())]
pub struct IOError {
    file: std::path::PathBuf,
    #[source]
    source: std::io::Error,
}

impl IOError {
    pub fn new(file: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        Self {
            file: file.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} {}", match file { Some(f) => f.display().to_string(), None => "".into() })]
pub struct JSONError {
    file: Option<std::path::PathBuf>,
    #[source]
    source: serde_json::Error,
}

impl JSONError {
    pub fn new(file: Option<std::path::PathBuf>, source: serde_json::Error) -> Self {
        Self { file, source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::JSON(JSONError::new(None, source))
    }
}
