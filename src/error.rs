use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[error("Output write error: {0}")]
    Write(#[source] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Walk error: {0}")]
    Walk(String),
}
impl BundleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn decode(path: impl Into<PathBuf>, source: FromUtf8Error) -> Self {
        BundleError::Decode {
            path: path.into(),
            source,
        }
    }
}
