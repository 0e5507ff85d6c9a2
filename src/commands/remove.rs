//! Player removal command implementation

use crate::{cli::types::Season, error::StatsError, storage::StatsDatabase, Result};

/// Handle the remove command
pub fn handle_remove(name: &str, season: Option<Season>) -> Result<()> {
    let season = super::resolve_season(season)?;
    let mut db = StatsDatabase::new()?;

    if db.delete_player(&season, name)? {
        println!("✓ Removed {} from season {}", name.trim(), season);
        Ok(())
    } else {
        Err(StatsError::PlayerNotFound {
            name: name.trim().to_string(),
        })
    }
}
