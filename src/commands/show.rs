//! Single player display command implementation

use crate::{
    cli::types::Season,
    error::StatsError,
    model::columns,
    storage::StatsDatabase,
    Result,
};

/// Handle the show command
pub fn handle_show(name: &str, season: Option<Season>, as_json: bool) -> Result<()> {
    let season = super::resolve_season(season)?;
    let db = StatsDatabase::new()?;

    let record = db
        .get_player(&season, name)?
        .ok_or_else(|| StatsError::PlayerNotFound {
            name: name.trim().to_string(),
        })?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    // Dump present fields in feed column order
    let raw = record.to_raw();
    for column in columns::COLUMNS {
        if let Some(value) = raw.get(column) {
            println!("{column:>12}  {value}");
        }
    }

    Ok(())
}
