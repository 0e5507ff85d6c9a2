//! Integration tests for on-disk storage
//!
//! The in-memory unit tests cover query semantics; these exercise the
//! file-backed path: schema creation on open, persistence across reopen,
//! and isolation between separate database files.

use pl_stats::cli::PlayerFilters;
use pl_stats::storage::StatsDatabase;
use pl_stats::{PlayerRecord, RawRow, Season};

fn season(label: &str) -> Season {
    Season::new(label).unwrap()
}

fn record(pairs: &[(&str, &str)]) -> PlayerRecord {
    let row = RawRow::from_pairs(pairs.iter().copied());
    PlayerRecord::from_raw(&row).unwrap()
}

fn saka() -> PlayerRecord {
    record(&[
        ("player", "Bukayo Saka"),
        ("nation", "eng ENG"),
        ("pos", "FW,MF"),
        ("team", "Arsenal"),
        ("gls", "12"),
        ("ast", "9"),
        ("g_a", "21"),
    ])
}

fn rodri() -> PlayerRecord {
    record(&[
        ("player", "Rodri"),
        ("nation", "es ESP"),
        ("pos", "MF"),
        ("team", "Manchester City"),
        ("gls", "3"),
    ])
}

#[test]
fn test_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.db");
    let s = season("2024-2025");

    {
        let mut db = StatsDatabase::with_path(&path).unwrap();
        db.upsert_player(&s, &saka()).unwrap();
    }

    // Reopen from the same file
    let db = StatsDatabase::with_path(&path).unwrap();
    assert_eq!(db.count_players(&s).unwrap(), 1);
    let stored = db.get_player(&s, "Bukayo Saka").unwrap();
    assert_eq!(stored, Some(saka()));
}

#[test]
fn test_with_path_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("players.db");

    let _db = StatsDatabase::with_path(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_import_log_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.db");
    let s = season("2024-2025");

    {
        let mut db = StatsDatabase::with_path(&path).unwrap();
        db.import_batch(&s, &[saka(), rodri()], "stats.csv", 3, false)
            .unwrap();
    }

    let db = StatsDatabase::with_path(&path).unwrap();
    let summaries = db.seasons().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].season, s);
    assert_eq!(summaries[0].players, 2);
    assert_eq!(summaries[0].imports, 1);

    let cycle = summaries[0].last_import.clone().unwrap();
    assert_eq!(cycle.source, "stats.csv");
    assert_eq!(cycle.rows_imported, 2);
    assert_eq!(cycle.rows_rejected, 3);
}

#[test]
fn test_replace_import_drops_previous_rows_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.db");
    let s = season("2024-2025");

    {
        let mut db = StatsDatabase::with_path(&path).unwrap();
        db.import_batch(&s, &[saka(), rodri()], "stats.csv", 0, false)
            .unwrap();
    }
    {
        let mut db = StatsDatabase::with_path(&path).unwrap();
        db.import_batch(&s, &[rodri()], "stats-v2.csv", 0, true)
            .unwrap();
    }

    let db = StatsDatabase::with_path(&path).unwrap();
    assert_eq!(db.count_players(&s).unwrap(), 1);
    assert!(db.get_player(&s, "Bukayo Saka").unwrap().is_none());
    assert_eq!(db.seasons().unwrap()[0].imports, 2);
}

#[test]
fn test_filters_apply_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.db");
    let s = season("2024-2025");

    {
        let mut db = StatsDatabase::with_path(&path).unwrap();
        db.upsert_player(&s, &saka()).unwrap();
        db.upsert_player(&s, &rodri()).unwrap();
    }

    let db = StatsDatabase::with_path(&path).unwrap();
    let filters = PlayerFilters {
        team: Some("Arsenal".to_string()),
        ..Default::default()
    };
    let players = db.list_players(&s, &filters).unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name(), "Bukayo Saka");
}

#[test]
fn test_separate_files_do_not_share_rows() {
    let dir = tempfile::tempdir().unwrap();
    let s = season("2024-2025");

    let mut first = StatsDatabase::with_path(dir.path().join("first.db")).unwrap();
    let second = StatsDatabase::with_path(dir.path().join("second.db")).unwrap();

    first.upsert_player(&s, &saka()).unwrap();

    // Identical queries against both handles; the empty database must not
    // pick up the other handle's cached result.
    let filters = PlayerFilters::default();
    assert_eq!(first.list_players(&s, &filters).unwrap().len(), 1);
    assert!(second.list_players(&s, &filters).unwrap().is_empty());
}

#[test]
fn test_rows_survive_upsert_replacement_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.db");
    let s = season("2024-2025");

    {
        let mut db = StatsDatabase::with_path(&path).unwrap();
        db.upsert_player(&s, &saka()).unwrap();
        let updated = record(&[("player", "Bukayo Saka"), ("team", "Arsenal"), ("gls", "13")]);
        db.upsert_player(&s, &updated).unwrap();
    }

    let db = StatsDatabase::with_path(&path).unwrap();
    assert_eq!(db.count_players(&s).unwrap(), 1);
    let stored = db.get_player(&s, "Bukayo Saka").unwrap().unwrap();
    assert_eq!(stored.gls(), Some(13.0));
    // Replacement swapped the whole row, so fields absent in the update stay absent
    assert_eq!(stored.ast(), None);
}
