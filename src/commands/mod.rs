//! Command implementations for the player statistics CLI

pub mod import;
pub mod players;
pub mod remove;
pub mod seasons;
pub mod show;


use crate::cli::types::Season;
use crate::error::Result;

/// Resolve the season to operate on: the explicit flag wins, then the
/// `PL_STATS_SEASON` environment variable, then the current season.
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    match season {
        Some(season) => Ok(season),
        None => match std::env::var(crate::SEASON_ENV_VAR) {
            Ok(label) => Season::new(label),
            Err(_) => Ok(Season::default()),
        },
    }
}
