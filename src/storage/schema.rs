//! Database schema and connection management

use anyhow::{Context, Result};
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::cache;

/// Database connection manager for season player statistics
pub struct StatsDatabase {
    pub(crate) conn: Connection,
    /// Distinguishes this handle's entries in the shared query cache.
    pub(crate) cache_tag: u64,
}

impl StatsDatabase {
    /// Open the default database and ensure tables exist.
    ///
    /// The location honors the `PL_STATS_DB` environment variable and
    /// otherwise lands under the user cache directory.
    pub fn new() -> Result<Self> {
        Self::with_path(Self::database_path()?)
    }

    /// Open a database at an explicit path and ensure tables exist.
    pub fn with_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self {
            conn,
            cache_tag: cache::next_handle_tag(),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open a fresh in-memory database, mainly useful in tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self {
            conn,
            cache_tag: cache::next_handle_tag(),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(crate::DB_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let cache_dir = cache_dir().context("could not determine the user cache directory")?;
        Ok(cache_dir.join("pl-stats").join("players.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // One row per (season, player); the synthetic id stays out of the
        // serialized record.
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_stats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                season TEXT NOT NULL,
                player TEXT NOT NULL,
                nation TEXT,
                pos TEXT,
                age INTEGER,
                mp INTEGER,
                starts INTEGER,
                min REAL,
                nineties REAL,
                gls REAL,
                ast REAL,
                g_a REAL,
                gpk REAL,
                pk REAL,
                pkatt REAL,
                crdy REAL,
                crdr REAL,
                xg REAL,
                npxg REAL,
                xag REAL,
                npxg_xag REAL,
                prgc REAL,
                prgp REAL,
                prgr REAL,
                gls_1 REAL,
                ast_1 REAL,
                g_a_1 REAL,
                gpk_1 REAL,
                g_apk REAL,
                xg_1 REAL,
                xag_1 REAL,
                xg_xag REAL,
                npxg_1 REAL,
                npxg_xag_1 REAL,
                matches TEXT,
                team TEXT,
                imported_at INTEGER NOT NULL,
                UNIQUE (season, player)
            )",
            [],
        )?;

        // Audit log of import invocations
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS import_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                season TEXT NOT NULL,
                source TEXT NOT NULL,
                imported_at INTEGER NOT NULL,
                rows_imported INTEGER NOT NULL,
                rows_rejected INTEGER NOT NULL
            )",
            [],
        )?;

        // Create indexes for the common filter paths
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_stats_season_team
             ON player_stats(season, team)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_stats_season_pos
             ON player_stats(season, pos)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_import_log_season
             ON import_log(season)",
            [],
        )?;

        Ok(())
    }
}
