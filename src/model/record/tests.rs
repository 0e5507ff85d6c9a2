//! Unit tests for the record type: round-tripping, serialization keys,
//! and the identity contract.

use super::*;
use crate::model::columns;

fn raw(pairs: &[(&str, &str)]) -> RawRow {
    RawRow::from_pairs(pairs.iter().copied())
}

fn sample_record() -> PlayerRecord {
    let row = raw(&[
        ("player", "Declan Rice"),
        ("nation", "eng ENG"),
        ("pos", "MF"),
        ("age", "25"),
        ("mp", "37"),
        ("starts", "36"),
        ("min", "3240"),
        ("nineties", "36.0"),
        ("gls", "7"),
        ("ast", "8"),
        ("g_a", "15"),
        ("gpk", "7"),
        ("pk", "0"),
        ("pkatt", "0"),
        ("crdy", "5"),
        ("crdr", "0"),
        ("xg", "5.3"),
        ("npxg", "5.3"),
        ("xag", "6.1"),
        ("npxg_xag", "11.4"),
        ("prgc", "61"),
        ("prgp", "219"),
        ("prgr", "120"),
        ("gls_1", "0.19"),
        ("ast_1", "0.22"),
        ("g_a_1", "0.42"),
        ("gpk_1", "0.19"),
        ("g_apk", "0.42"),
        ("xg_1", "0.15"),
        ("xag_1", "0.17"),
        ("xg_xag", "0.32"),
        ("npxg_1", "0.15"),
        ("npxg_xag_1", "0.32"),
        ("matches", "Matches"),
        ("team", "Arsenal"),
    ]);
    PlayerRecord::from_raw(&row).expect("sample row should validate")
}

fn keeper_record() -> PlayerRecord {
    let row = raw(&[
        ("player", "Jordan Pickford"),
        ("nation", "eng ENG"),
        ("pos", "GK"),
        ("age", "30"),
        ("mp", "38"),
        ("starts", "38"),
        ("min", "3420"),
        ("nineties", "38.0"),
        ("gls", "0"),
        ("ast", "0"),
        ("g_a", "0"),
        ("crdy", "2"),
        ("team", "Everton"),
    ]);
    PlayerRecord::from_raw(&row).expect("keeper row should validate")
}

#[test]
fn round_trip_through_raw_form_is_lossless() {
    let record = sample_record();
    let rebuilt = PlayerRecord::from_raw(&record.to_raw()).expect("raw form should validate");

    assert_eq!(record, rebuilt);
}

#[test]
fn round_trip_preserves_absence() {
    let record = keeper_record();
    let rawed = record.to_raw();

    assert_eq!(rawed.get("prgc"), None);
    assert_eq!(rawed.get("pk"), None);

    let rebuilt = PlayerRecord::from_raw(&rawed).expect("raw form should validate");
    assert_eq!(record, rebuilt);
    assert_eq!(rebuilt.prgc(), None);
}

#[test]
fn revalidating_a_valid_record_adds_no_violations() {
    let record = sample_record();
    let once = PlayerRecord::from_raw(&record.to_raw()).expect("first pass");
    let twice = PlayerRecord::from_raw(&once.to_raw()).expect("second pass");

    assert_eq!(once, twice);
}

#[test]
fn serialization_uses_the_fixed_column_names() {
    let value = serde_json::to_value(sample_record()).expect("record serializes");
    let object = value.as_object().expect("record serializes to an object");

    for key in object.keys() {
        assert!(columns::is_known(key), "unexpected key {key}");
    }
    assert_eq!(object.len(), columns::EXPECTED_FIELD_COUNT);
    assert_eq!(object["player"], "Declan Rice");
    assert_eq!(object["g_a"], 15.0);
    assert!(object["gls"].is_number());
}

#[test]
fn serialization_omits_absent_fields() {
    let value = serde_json::to_value(keeper_record()).expect("record serializes");
    let object = value.as_object().expect("record serializes to an object");

    assert!(object.contains_key("player"));
    assert!(object.contains_key("mp"));
    assert!(!object.contains_key("prgc"));
    assert!(!object.contains_key("xg"));
}

#[test]
fn same_player_compares_the_name_key_only() {
    let a = sample_record();
    let mut raw_b = a.to_raw();
    raw_b.set("gls", "6");
    raw_b.set("g_a", "14");
    raw_b.set("gpk", "6");
    raw_b.set("gls_1", "0.17");
    raw_b.set("g_a_1", "0.39");
    raw_b.set("gpk_1", "0.17");
    raw_b.set("g_apk", "0.39");
    let b = PlayerRecord::from_raw(&raw_b).expect("edited row should validate");

    assert!(a.same_player(&b));
    assert_ne!(a, b);

    let c = keeper_record();
    assert!(!a.same_player(&c));
}

#[test]
fn value_equality_covers_every_attribute() {
    let a = sample_record();
    let b = sample_record();
    assert_eq!(a, b);

    let mut raw_c = a.to_raw();
    raw_c.set("team", "Arsenal FC");
    let c = PlayerRecord::from_raw(&raw_c).expect("edited row should validate");
    assert_ne!(a, c);
}
