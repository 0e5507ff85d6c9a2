//! Error types for the player statistics CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Feed header is missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Feed contained no data rows")]
    EmptyFeed,

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid season label: {season}")]
    InvalidSeason { season: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },
}
