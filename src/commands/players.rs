//! Player listing command implementation

use crate::{
    cli::{types::Season, PlayerFilters},
    storage::StatsDatabase,
    Result,
};

fn fmt_count(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn fmt_stat(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Handle the players command
pub fn handle_players(filters: PlayerFilters, season: Option<Season>, as_json: bool) -> Result<()> {
    let season = super::resolve_season(season)?;
    let db = StatsDatabase::new()?;

    let players = db.list_players(&season, &filters)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No players stored for season {} match the filters", season);
        return Ok(());
    }

    for player in &players {
        println!(
            "{} ({}) {} [mp {}] gls {} ast {} xg {}",
            player.name(),
            player.pos().unwrap_or("-"),
            player.team().unwrap_or("-"),
            fmt_count(player.mp()),
            fmt_stat(player.gls()),
            fmt_stat(player.ast()),
            fmt_stat(player.xg()),
        );
    }
    println!("✓ {} players in season {}", players.len(), season);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_count_prints_a_dash_for_absent_values() {
        assert_eq!(fmt_count(Some(12)), "12");
        assert_eq!(fmt_count(None), "-");
    }

    #[test]
    fn test_fmt_stat_uses_the_shortest_decimal_form() {
        assert_eq!(fmt_stat(Some(12.0)), "12");
        assert_eq!(fmt_stat(Some(0.35)), "0.35");
        assert_eq!(fmt_stat(None), "-");
    }
}
