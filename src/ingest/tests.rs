//! Unit tests for feed ingestion

use std::io::Write;

use super::*;
use crate::cli::types::Season;
use crate::error::StatsError;
use crate::model::ViolationKind;

#[test]
fn test_parse_feed_happy_path() {
    let csv = "player,nation,pos,age,team,gls,ast,g_a\n\
               Bukayo Saka,eng ENG,\"FW,MF\",23,Arsenal,12,9,21\n\
               Rodri,es ESP,MF,28,Manchester City,3,1,4\n";

    let batch = parse_feed(csv.as_bytes()).unwrap();

    assert_eq!(batch.records.len(), 2);
    assert!(batch.rejections.is_empty());
    assert_eq!(batch.duplicate_rows, 0);
    assert_eq!(batch.rows_read(), 2);

    let saka = &batch.records[0];
    assert_eq!(saka.name(), "Bukayo Saka");
    assert_eq!(saka.pos(), Some("FW,MF"));
    assert_eq!(saka.age(), Some(23));
    assert_eq!(saka.gls(), Some(12.0));
}

#[test]
fn test_parse_feed_header_order_does_not_matter() {
    let csv = "team,g_a,ast,gls,player\n\
               Arsenal,21,9,12,Bukayo Saka\n";

    let batch = parse_feed(csv.as_bytes()).unwrap();

    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].name(), "Bukayo Saka");
    assert_eq!(batch.records[0].g_a(), Some(21.0));
}

#[test]
fn test_parse_feed_requires_the_player_column() {
    let csv = "nation,team,gls\neng ENG,Arsenal,12\n";

    let result = parse_feed(csv.as_bytes());

    assert!(matches!(
        result,
        Err(StatsError::MissingColumn { column }) if column == "player"
    ));
}

#[test]
fn test_parse_feed_empty_input_reports_the_missing_column() {
    let result = parse_feed("".as_bytes());
    assert!(matches!(result, Err(StatsError::MissingColumn { .. })));
}

#[test]
fn test_parse_feed_header_without_rows_is_an_empty_feed() {
    let result = parse_feed("player,team,gls\n".as_bytes());
    assert!(matches!(result, Err(StatsError::EmptyFeed)));
}

#[test]
fn test_parse_feed_rejects_rows_of_the_wrong_width() {
    let csv = "player,team,gls,ast,g_a\n\
               Erling Haaland,Manchester City\n\
               Bukayo Saka,Arsenal,12,9,21\n";

    let batch = parse_feed(csv.as_bytes()).unwrap();

    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.rejections.len(), 1);

    let rejection = &batch.rejections[0];
    assert_eq!(rejection.name.as_deref(), Some("Erling Haaland"));
    assert_eq!(rejection.violations.len(), 1);
    assert_eq!(
        rejection.violations[0].kind,
        ViolationKind::FieldCountMismatch
    );
    assert!(rejection.violations[0].detail.contains("expected 5"));
}

#[test]
fn test_parse_feed_collects_every_violation_for_a_row() {
    let csv = "player,gls,ast,g_a\n\
               Broken Totals,-10,-2,8\n\
               Broken Sum,10,2,99\n";

    let batch = parse_feed(csv.as_bytes()).unwrap();

    assert!(batch.records.is_empty());
    assert_eq!(batch.rejections.len(), 2);

    let totals = &batch.rejections[0];
    assert_eq!(totals.name.as_deref(), Some("Broken Totals"));
    assert_eq!(totals.violations.len(), 2);
    assert!(totals
        .violations
        .iter()
        .all(|v| v.kind == ViolationKind::InvalidNumericValue));

    let sum = &batch.rejections[1];
    assert_eq!(sum.violations.len(), 1);
    assert_eq!(
        sum.violations[0].kind,
        ViolationKind::InconsistentDerivedMetric
    );
    assert_eq!(sum.violations[0].field, "g_a");
}

#[test]
fn test_parse_feed_duplicate_rows_keep_the_later_one() {
    let csv = "player,team,gls\n\
               Bukayo Saka,Arsenal,11\n\
               Rodri,Manchester City,3\n\
               Bukayo Saka,Arsenal,12\n";

    let batch = parse_feed(csv.as_bytes()).unwrap();

    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.duplicate_rows, 1);
    assert_eq!(batch.rows_read(), 3);

    // The player keeps the original position in the listing
    assert_eq!(batch.records[0].name(), "Bukayo Saka");
    assert_eq!(batch.records[0].gls(), Some(12.0));
}

#[test]
fn test_parse_feed_ignores_unknown_columns() {
    let csv = "rk,player,team,gls\n\
               1,Bukayo Saka,Arsenal,12\n";

    let batch = parse_feed(csv.as_bytes()).unwrap();

    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].gls(), Some(12.0));
}

#[test]
fn test_parse_feed_handles_quoted_names_with_commas() {
    let csv = "player,team,gls\n\
               \"Son, Heung-min\",Tottenham,10\n";

    let batch = parse_feed(csv.as_bytes()).unwrap();

    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].name(), "Son, Heung-min");
}

#[test]
fn test_load_feed_reads_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"player,team,gls\nBukayo Saka,Arsenal,12\n")
        .unwrap();

    let batch = load_feed(file.path()).unwrap();

    assert_eq!(batch.records.len(), 1);
}

#[test]
fn test_load_feed_missing_file_is_an_io_error() {
    let result = load_feed("/definitely/not/here.csv");
    assert!(matches!(result, Err(StatsError::Io(_))));
}

#[tokio::test]
async fn test_fetch_feed_unreachable_host() {
    let result = fetch_feed("http://feed.invalid/stats.csv").await;
    assert!(matches!(result, Err(StatsError::Http(_))));
}

#[tokio::test]
async fn test_read_source_treats_plain_paths_as_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"player,team,gls\nBukayo Saka,Arsenal,12\n")
        .unwrap();

    let batch = read_source(file.path().to_str().unwrap()).await.unwrap();

    assert_eq!(batch.records.len(), 1);
}

#[test]
fn test_import_report_carries_the_batch_counts() {
    let csv = "player,gls,ast,g_a\n\
               Bukayo Saka,12,9,21\n\
               Bukayo Saka,12,9,21\n\
               Broken Sum,10,2,99\n";
    let batch = parse_feed(csv.as_bytes()).unwrap();

    let season = Season::new("2024-2025").unwrap();
    let report = ImportReport::new(season, "stats.csv", true, &batch);

    assert_eq!(report.rows_read, 3);
    assert_eq!(report.rows_imported, 1);
    assert_eq!(report.rows_rejected, 1);
    assert_eq!(report.duplicate_rows, 1);
    assert!(report.dry_run);
    assert_eq!(report.rejections.len(), 1);
}
