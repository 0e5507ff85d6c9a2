//! Results of parsing and importing a feed.

use serde::Serialize;

use crate::cli::types::Season;
use crate::model::{PlayerRecord, RowRejection};

/// Outcome of parsing one feed.
///
/// `records` holds the validated rows in feed order, with a later duplicate
/// of the same player replacing the earlier one. `rejections` holds every
/// rejected row with its full violation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedBatch {
    pub records: Vec<PlayerRecord>,
    pub rejections: Vec<RowRejection>,
    /// Rows that were overwritten by a later row naming the same player.
    pub duplicate_rows: u32,
}

impl FeedBatch {
    /// Data rows the feed contained.
    pub fn rows_read(&self) -> u32 {
        self.records.len() as u32 + self.rejections.len() as u32 + self.duplicate_rows
    }
}

/// Summary of one import invocation, printable as text or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportReport {
    pub season: Season,
    pub source: String,
    pub dry_run: bool,
    pub rows_read: u32,
    pub rows_imported: u32,
    pub rows_rejected: u32,
    pub duplicate_rows: u32,
    pub rejections: Vec<RowRejection>,
}

impl ImportReport {
    pub fn new(season: Season, source: &str, dry_run: bool, batch: &FeedBatch) -> Self {
        ImportReport {
            season,
            source: source.to_string(),
            dry_run,
            rows_read: batch.rows_read(),
            rows_imported: batch.records.len() as u32,
            rows_rejected: batch.rejections.len() as u32,
            duplicate_rows: batch.duplicate_rows,
            rejections: batch.rejections.clone(),
        }
    }
}
