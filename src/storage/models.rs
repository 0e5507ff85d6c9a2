//! Data models for the storage layer

use crate::cli::types::Season;
use serde::{Deserialize, Serialize};

/// One import invocation, as recorded in the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportCycle {
    pub season: Season,
    /// Feed location the rows came from (path or URL).
    pub source: String,
    /// Unix seconds.
    pub imported_at: i64,
    pub rows_imported: u32,
    pub rows_rejected: u32,
}

/// Season-level view of what the store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season: Season,
    pub players: u32,
    pub imports: u32,
    pub last_import: Option<ImportCycle>,
}
