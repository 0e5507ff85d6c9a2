//! CSV parsing and row validation for the statistics feed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use rayon::prelude::*;
use tracing::warn;

use super::report::FeedBatch;
use crate::error::{Result, StatsError};
use crate::model::{columns, PlayerRecord, RawRow, RowRejection};

/// Parses and validates a whole feed.
///
/// The header names columns; order does not matter and unknown columns are
/// ignored with a warning. Each data row must be as wide as the header.
/// Rows validate independently (in parallel for large feeds), and a row
/// naming an already-seen player replaces the earlier one.
pub fn parse_feed<R: Read>(reader: R) -> Result<FeedBatch> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let header: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|column| column.trim().to_string())
        .collect();
    if !header.iter().any(|column| column == columns::PLAYER) {
        return Err(StatsError::MissingColumn {
            column: columns::PLAYER.to_string(),
        });
    }
    for column in &header {
        if !columns::is_known(column) {
            warn!("ignoring unknown feed column: {column}");
        }
    }
    let name_index = header.iter().position(|column| column == columns::PLAYER);

    // First pass sorts rows into parseable and structurally broken
    let mut rows: Vec<std::result::Result<RawRow, RowRejection>> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() != header.len() {
            let name = name_index
                .and_then(|index| record.get(index))
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
            rows.push(Err(RowRejection::field_count(
                name,
                header.len(),
                record.len(),
            )));
            continue;
        }
        rows.push(Ok(RawRow::from_pairs(
            header.iter().map(String::as_str).zip(record.iter()),
        )));
    }

    if rows.is_empty() {
        return Err(StatsError::EmptyFeed);
    }

    // Rows are independent, so validation fans out across cores
    let outcomes: Vec<std::result::Result<PlayerRecord, RowRejection>> = rows
        .into_par_iter()
        .map(|row| row.and_then(|raw| PlayerRecord::from_raw(&raw)))
        .collect();

    let mut records: Vec<PlayerRecord> = Vec::new();
    let mut rejections: Vec<RowRejection> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut duplicate_rows = 0u32;

    for outcome in outcomes {
        match outcome {
            Ok(record) => match seen.entry(record.name().to_string()) {
                Entry::Occupied(slot) => {
                    warn!(
                        "duplicate feed row for {}, keeping the later one",
                        record.name()
                    );
                    records[*slot.get()] = record;
                    duplicate_rows += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(records.len());
                    records.push(record);
                }
            },
            Err(rejection) => rejections.push(rejection),
        }
    }

    Ok(FeedBatch {
        records,
        rejections,
        duplicate_rows,
    })
}

/// Parses a feed from a local CSV file.
pub fn load_feed(path: impl AsRef<Path>) -> Result<FeedBatch> {
    let file = File::open(path)?;
    parse_feed(BufReader::new(file))
}
