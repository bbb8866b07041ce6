use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while preparing the output root or the run log. Always fatal.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("could not create output directory {path:?}")]
    CreateRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not create log file {path:?}")]
    CreateLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
#[error("could not append to log file {path:?}")]
pub struct LogWriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    LogWrite(#[from] LogWriteError),
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("search request failed: {0}")]
    Http(String),

    #[error("search returned HTTP {0}")]
    Status(u16),

    #[error("search page did not contain a vqd token")]
    MissingToken,

    #[error("search returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// Failures that skip a whole category but not the run.
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("could not create folder {path:?}: {source}")]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP 404 not found")]
    NotFound,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("request timed out")]
    TimedOut,

    #[error("network error: {0}")]
    Network(String),

    #[error("response body could not be read")]
    InvalidBody,
}

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("result has no image url")]
    MalformedResult,

    #[error("invalid url {0:?}")]
    InvalidUrl(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("cannot identify image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("could not save {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
