//! Season summary command implementation

use crate::{storage::StatsDatabase, Result};

/// Handle the seasons command
pub fn handle_seasons(as_json: bool) -> Result<()> {
    let db = StatsDatabase::new()?;
    let summaries = db.seasons()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No seasons stored yet");
        return Ok(());
    }

    for summary in &summaries {
        match &summary.last_import {
            Some(cycle) => println!(
                "{}: {} players, {} imports (last from {})",
                summary.season, summary.players, summary.imports, cycle.source
            ),
            None => println!(
                "{}: {} players, no imports logged",
                summary.season, summary.players
            ),
        }
    }

    Ok(())
}
