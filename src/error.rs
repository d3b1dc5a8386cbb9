use thiserror::Error;

use crate::config::{CLIENT_ID_VAR, CLIENT_SECRET_VAR};

/// Fallback message for failures that carry no text of their own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Song name is required")]
    Validation,

    #[error("{} and {} environment variables are required", CLIENT_ID_VAR, CLIENT_SECRET_VAR)]
    Configuration,

    /// Failure talking to the catalog (token exchange, search, response decoding).
    #[error("{0}")]
    Catalog(String),

    #[error("Failed to fetch preview URLs: {}", or_unknown(.0))]
    Extraction(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl FinderError {
    /// The message reported to callers in a failed `SearchResult`.
    pub fn message(&self) -> String {
        or_unknown(&self.to_string()).to_string()
    }
}

fn or_unknown(message: &str) -> &str {
    if message.is_empty() {
        UNKNOWN_ERROR
    } else {
        message
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
