use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No releases found in the Go downloads API response")]
    EmptyResult,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("Not enough {what}: need at least {needed}, found {found}")]
    InsufficientData {
        what: &'static str,
        needed: usize,
        found: usize,
    },
}
