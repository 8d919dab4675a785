// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;

// Allow `?` on std::io::Error by converting to AuditError::Io with unknown path.
impl From<std::io::Error> for AuditError {
    fn from(source: std::io::Error) -> Self {
        AuditError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
