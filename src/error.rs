//! Error type shared by parsing, roster loading and fixture fetching.
//!
//! Scoring itself never fails: it only ever sees validated fixtures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("fixture data unavailable: {0}")]
    DataUnavailable(String),

    #[error("invalid fixture #{index}: {reason}")]
    InvalidFixture { index: usize, reason: String },

    #[error("invalid team name: {0:?}")]
    InvalidTeamName(String),

    #[error("roster error: {0}")]
    Roster(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
