//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{Position, Season};

/// Common filtering arguments shared between commands
#[derive(Debug, Clone, Default, Args)]
pub struct PlayerFilters {
    /// Filter by team name (exact match, e.g. "Arsenal").
    #[clap(long, short)]
    pub team: Option<String>,

    /// Filter by nation as the feed reports it (e.g. "eng ENG").
    #[clap(long)]
    pub nation: Option<String>,

    /// Filter by position code: GK, DF, MF or FW. Matches combined listings
    /// like "MF,FW".
    #[clap(short = 'p', long = "position")]
    pub position: Option<Position>,

    /// Filter by player name (substring match).
    #[clap(long, short = 'n')]
    pub name: Option<String>,
}

#[derive(Debug, Parser)]
#[clap(name = "pl-stats", about = "Season player statistics store")]
pub struct PlStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate and import a statistics feed for one season.
    ///
    /// Every row is checked against the cross-field consistency rules; rows
    /// that fail are reported with their full violation list and skipped,
    /// rows that pass replace the season's existing row for that player.
    Import {
        /// Feed location: a local CSV path or an http(s) URL.
        source: String,

        /// Season label (or set `PL_STATS_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        /// Clear the season's rows before importing.
        #[clap(long)]
        replace: bool,

        /// Validate and report without writing to the database.
        #[clap(long)]
        dry_run: bool,

        /// Output the import report as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List stored players, optionally filtered.
    Players {
        #[clap(flatten)]
        filters: PlayerFilters,

        /// Season label (or set `PL_STATS_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show every stored stat for one player.
    Show {
        /// Player name, exactly as imported.
        name: String,

        /// Season label (or set `PL_STATS_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output the record as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete one player's row for a season.
    Remove {
        /// Player name, exactly as imported.
        name: String,

        /// Season label (or set `PL_STATS_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,
    },

    /// List seasons in the database with their import history.
    Seasons {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
