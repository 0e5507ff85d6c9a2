//! Basic database query operations

use super::{
    models::{ImportCycle, SeasonSummary},
    schema::StatsDatabase,
};
use crate::cache::{PlayerQueryKey, QUERY_CACHE};
use crate::cli::PlayerFilters;
use crate::cli::types::Season;
use crate::model::{columns, PlayerRecord, RawRow};
use anyhow::{anyhow, Result};
use rusqlite::{params, Row};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stat columns in feed order, as both the table and the SELECT lists use
/// them.
fn stat_columns() -> String {
    columns::COLUMNS.join(", ")
}

fn insert_sql() -> String {
    let placeholders = vec!["?"; columns::COLUMNS.len() + 2].join(", ");
    format!(
        "INSERT OR REPLACE INTO player_stats (season, {}, imported_at) VALUES ({})",
        stat_columns(),
        placeholders
    )
}

/// Parameter list matching [`insert_sql`]: season, the stat columns in feed
/// order, imported_at.
fn record_params(
    season: &Season,
    record: &PlayerRecord,
    now: i64,
) -> Vec<Box<dyn rusqlite::ToSql>> {
    vec![
        Box::new(season.as_str().to_string()),
        Box::new(record.name().to_string()),
        Box::new(record.nation().map(str::to_string)),
        Box::new(record.pos().map(str::to_string)),
        Box::new(record.age()),
        Box::new(record.mp()),
        Box::new(record.starts()),
        Box::new(record.min()),
        Box::new(record.nineties()),
        Box::new(record.gls()),
        Box::new(record.ast()),
        Box::new(record.g_a()),
        Box::new(record.gpk()),
        Box::new(record.pk()),
        Box::new(record.pkatt()),
        Box::new(record.crdy()),
        Box::new(record.crdr()),
        Box::new(record.xg()),
        Box::new(record.npxg()),
        Box::new(record.xag()),
        Box::new(record.npxg_xag()),
        Box::new(record.prgc()),
        Box::new(record.prgp()),
        Box::new(record.prgr()),
        Box::new(record.gls_1()),
        Box::new(record.ast_1()),
        Box::new(record.g_a_1()),
        Box::new(record.gpk_1()),
        Box::new(record.g_apk()),
        Box::new(record.xg_1()),
        Box::new(record.xag_1()),
        Box::new(record.xg_xag()),
        Box::new(record.npxg_1()),
        Box::new(record.npxg_xag_1()),
        Box::new(record.matches().map(str::to_string)),
        Box::new(record.team().map(str::to_string)),
        Box::new(now),
    ]
}

/// Helper to convert a database row back into its raw feed form.
fn row_to_raw(row: &Row) -> rusqlite::Result<RawRow> {
    let mut raw = RawRow::new();
    raw.set(columns::PLAYER, row.get::<_, String>("player")?);
    if let Some(v) = row.get::<_, Option<String>>("nation")? {
        raw.set("nation", v);
    }
    if let Some(v) = row.get::<_, Option<String>>("pos")? {
        raw.set("pos", v);
    }
    if let Some(v) = row.get::<_, Option<u32>>("age")? {
        raw.set("age", v.to_string());
    }
    if let Some(v) = row.get::<_, Option<u32>>("mp")? {
        raw.set("mp", v.to_string());
    }
    if let Some(v) = row.get::<_, Option<u32>>("starts")? {
        raw.set("starts", v.to_string());
    }
    for column in [
        "min",
        "nineties",
        "gls",
        "ast",
        "g_a",
        "gpk",
        "pk",
        "pkatt",
        "crdy",
        "crdr",
        "xg",
        "npxg",
        "xag",
        "npxg_xag",
        "prgc",
        "prgp",
        "prgr",
        "gls_1",
        "ast_1",
        "g_a_1",
        "gpk_1",
        "g_apk",
        "xg_1",
        "xag_1",
        "xg_xag",
        "npxg_1",
        "npxg_xag_1",
    ] {
        if let Some(v) = row.get::<_, Option<f64>>(column)? {
            raw.set(column, v.to_string());
        }
    }
    if let Some(v) = row.get::<_, Option<String>>("matches")? {
        raw.set("matches", v);
    }
    if let Some(v) = row.get::<_, Option<String>>("team")? {
        raw.set("team", v);
    }
    Ok(raw)
}

/// Every read path revalidates the stored row, so a record handed out by the
/// database carries the same guarantees as one fresh from the feed.
fn rebuild(raw: &RawRow) -> Result<PlayerRecord> {
    PlayerRecord::from_raw(raw).map_err(|rejection| {
        anyhow!("stored row no longer passes validation: {rejection}")
    })
}

fn unix_now() -> Result<i64> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    Ok(now as i64)
}

impl StatsDatabase {
    /// Insert or replace one player's row for a season.
    pub fn upsert_player(&mut self, season: &Season, record: &PlayerRecord) -> Result<()> {
        let now = unix_now()?;
        self.conn.execute(
            &insert_sql(),
            rusqlite::params_from_iter(
                record_params(season, record, now).iter().map(|p| p.as_ref()),
            ),
        )?;
        QUERY_CACHE.invalidate();
        Ok(())
    }

    /// Store a validated batch in one transaction and append an entry to the
    /// import log. With `replace` set, the season's existing rows are dropped
    /// first; otherwise each imported player replaces only their own row.
    pub fn import_batch(
        &mut self,
        season: &Season,
        records: &[PlayerRecord],
        source: &str,
        rows_rejected: u32,
        replace: bool,
    ) -> Result<ImportCycle> {
        let now = unix_now()?;
        let tx = self.conn.transaction()?;
        if replace {
            tx.execute(
                "DELETE FROM player_stats WHERE season = ?",
                params![season.as_str()],
            )?;
        }
        {
            let mut stmt = tx.prepare(&insert_sql())?;
            for record in records {
                stmt.execute(rusqlite::params_from_iter(
                    record_params(season, record, now).iter().map(|p| p.as_ref()),
                ))?;
            }
        }
        tx.execute(
            "INSERT INTO import_log (season, source, imported_at, rows_imported, rows_rejected)
             VALUES (?, ?, ?, ?, ?)",
            params![
                season.as_str(),
                source,
                now,
                records.len() as u32,
                rows_rejected
            ],
        )?;
        tx.commit()?;
        QUERY_CACHE.invalidate();

        Ok(ImportCycle {
            season: season.clone(),
            source: source.to_string(),
            imported_at: now,
            rows_imported: records.len() as u32,
            rows_rejected,
        })
    }

    /// Get one player's record for a season, by exact name.
    pub fn get_player(&self, season: &Season, name: &str) -> Result<Option<PlayerRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM player_stats WHERE season = ? AND player = ?",
            stat_columns()
        ))?;

        let result = stmt.query_row(params![season.as_str(), name.trim()], row_to_raw);

        match result {
            Ok(raw) => Ok(Some(rebuild(&raw)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get a season's records with the given filters applied, ordered by
    /// player name.
    pub fn list_players(
        &self,
        season: &Season,
        filters: &PlayerFilters,
    ) -> Result<Vec<PlayerRecord>> {
        // Check cache first
        let cache_key = PlayerQueryKey {
            db: self.cache_tag,
            season: season.clone(),
            team: filters.team.clone(),
            nation: filters.nation.clone(),
            position: filters.position,
            name: filters.name.clone(),
        };
        if let Some(cached_result) = QUERY_CACHE.get(&cache_key) {
            return Ok(cached_result);
        }

        let mut query = format!(
            "SELECT {} FROM player_stats WHERE season = ?",
            stat_columns()
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(season.as_str().to_string())];

        if let Some(team) = &filters.team {
            query.push_str(" AND team = ?");
            params.push(Box::new(team.clone()));
        }

        if let Some(nation) = &filters.nation {
            query.push_str(" AND nation = ?");
            params.push(Box::new(nation.clone()));
        }

        // Position codes never contain each other, so a substring match also
        // covers combined listings like "MF,FW".
        if let Some(position) = filters.position {
            query.push_str(" AND pos LIKE ?");
            params.push(Box::new(format!("%{}%", position.code())));
        }

        if let Some(name) = &filters.name {
            query.push_str(" AND player LIKE ?");
            params.push(Box::new(format!("%{}%", name)));
        }

        query.push_str(" ORDER BY player");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            row_to_raw,
        )?;

        let mut records = Vec::new();
        for row in rows {
            records.push(rebuild(&row?)?);
        }

        // Cache the results
        QUERY_CACHE.put(cache_key, records.clone());

        Ok(records)
    }

    /// Number of player rows stored for a season.
    pub fn count_players(&self, season: &Season) -> Result<u32> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM player_stats WHERE season = ?",
            params![season.as_str()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Delete one player's row for a season. Returns whether a row existed.
    pub fn delete_player(&mut self, season: &Season, name: &str) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM player_stats WHERE season = ? AND player = ?",
            params![season.as_str(), name.trim()],
        )?;
        if rows_affected > 0 {
            QUERY_CACHE.invalidate();
        }
        Ok(rows_affected > 0)
    }

    /// Delete every player row for a season. Returns how many rows went.
    pub fn clear_season(&mut self, season: &Season) -> Result<u32> {
        let rows_affected = self.conn.execute(
            "DELETE FROM player_stats WHERE season = ?",
            params![season.as_str()],
        )?;
        if rows_affected > 0 {
            QUERY_CACHE.invalidate();
        }
        Ok(rows_affected as u32)
    }

    /// Clear all data from the database (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM player_stats", [])?;
        self.conn.execute("DELETE FROM import_log", [])?;
        QUERY_CACHE.invalidate();
        Ok(())
    }

    /// Summaries for every season present in either the stats table or the
    /// import log, ordered by season label.
    pub fn seasons(&self) -> Result<Vec<SeasonSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT season FROM player_stats
             UNION
             SELECT season FROM import_log
             ORDER BY season",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut labels = Vec::new();
        for row in rows {
            labels.push(row?);
        }

        let mut summaries = Vec::new();
        for label in labels {
            let season = Season::new(&label)?;
            let players = self.count_players(&season)?;
            let imports: u32 = self.conn.query_row(
                "SELECT COUNT(*) FROM import_log WHERE season = ?",
                params![season.as_str()],
                |row| row.get(0),
            )?;
            let last_import = self.last_import(&season)?;
            summaries.push(SeasonSummary {
                season,
                players,
                imports,
                last_import,
            });
        }
        Ok(summaries)
    }

    /// Most recent import log entry for a season, if any.
    pub fn last_import(&self, season: &Season) -> Result<Option<ImportCycle>> {
        let mut stmt = self.conn.prepare(
            "SELECT source, imported_at, rows_imported, rows_rejected
             FROM import_log
             WHERE season = ?
             ORDER BY imported_at DESC, id DESC
             LIMIT 1",
        )?;

        let result = stmt.query_row(params![season.as_str()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, u32>(3)?,
            ))
        });

        match result {
            Ok((source, imported_at, rows_imported, rows_rejected)) => Ok(Some(ImportCycle {
                season: season.clone(),
                source,
                imported_at,
                rows_imported,
                rows_rejected,
            })),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
