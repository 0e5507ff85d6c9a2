//! Feed import command implementation
//!
//! Reads a statistics feed from a local file or over http(s), validates every
//! row, and stores the rows that pass for one season. Rejected rows are
//! reported with their full violation lists so the feed can be fixed in one
//! pass; they are never written.

use crate::{
    cli::types::Season,
    ingest::{self, ImportReport},
    storage::StatsDatabase,
    Result,
};

/// Configuration parameters for a feed import.
#[derive(Debug)]
pub struct ImportParams {
    /// Local CSV path or http(s) URL.
    pub source: String,
    pub season: Option<Season>,
    /// Clear the season's rows before writing the batch.
    pub replace: bool,
    /// Validate and report without touching the database.
    pub dry_run: bool,
    pub as_json: bool,
}

/// Handle the import command
pub async fn handle_import(params: ImportParams) -> Result<()> {
    let season = super::resolve_season(params.season)?;

    println!("Reading feed from {}...", params.source);
    let batch = ingest::read_source(&params.source).await?;
    println!(
        "✓ Parsed {} rows: {} valid, {} rejected, {} duplicates",
        batch.rows_read(),
        batch.records.len(),
        batch.rejections.len(),
        batch.duplicate_rows,
    );

    if !params.as_json {
        for rejection in &batch.rejections {
            println!("⚠ {}", rejection);
        }
    }

    if params.dry_run {
        println!("Dry run, nothing written");
    } else {
        let mut db = StatsDatabase::new()?;
        db.import_batch(
            &season,
            &batch.records,
            &params.source,
            batch.rejections.len() as u32,
            params.replace,
        )?;
        println!(
            "✓ Stored {} players for season {}",
            batch.records.len(),
            season
        );
    }

    if params.as_json {
        let report = ImportReport::new(season, &params.source, params.dry_run, &batch);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
