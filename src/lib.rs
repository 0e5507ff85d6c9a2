//! Season Player Statistics CLI Library
//!
//! A Rust library for keeping season-long football player statistics in a
//! local store, fed by a scraped CSV feed and queried from the command line.
//!
//! ## Features
//!
//! - **Feed Ingestion**: Parse the statistics feed from a file or URL
//! - **Row Validation**: Cross-field consistency checks that collect every
//!   violation for a row instead of stopping at the first
//! - **Database Storage**: One row per player per season in local SQLite
//! - **Filtered Queries**: Look players up by team, nation, position, or name
//! - **Flexible Output**: Support for both human-readable and JSON output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pl_stats::commands::import::{handle_import, ImportParams};
//!
//! # async fn example() -> pl_stats::Result<()> {
//! // Validate a feed without writing anything
//! let params = ImportParams {
//!     source: "stats.csv".to_string(),
//!     season: None,
//!     replace: false,
//!     dry_run: true,
//!     as_json: false,
//! };
//!
//! handle_import(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the season once to avoid passing it in every command, and override
//! the database location if the default cache path does not suit:
//! ```bash
//! export PL_STATS_SEASON=2025-2026
//! export PL_STATS_DB=/tmp/players.db
//! ```

pub mod cache;
pub mod cli;
pub mod commands;
pub mod error;
pub mod ingest;
pub mod model;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Position, Season};
pub use error::{Result, StatsError};
pub use model::{PlayerRecord, RawRow, RowRejection};

pub const DB_PATH_ENV_VAR: &str = "PL_STATS_DB";
pub const SEASON_ENV_VAR: &str = "PL_STATS_SEASON";
