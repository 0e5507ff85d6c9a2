//! The fixed column map of the statistics feed.
//!
//! These names are the feed's CSV headers, the record's serialization keys,
//! and the storage column names. The `_1` suffix marks the per-90 variant of
//! a total with the same base name.

/// Key column holding the player name.
pub const PLAYER: &str = "player";

/// Every feed column, in feed order.
pub const COLUMNS: [&str; 35] = [
    PLAYER,
    "nation",
    "pos",
    "age",
    "mp",
    "starts",
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
    "matches",
    "team",
];

/// Number of cells a well-formed feed row carries.
pub const EXPECTED_FIELD_COUNT: usize = COLUMNS.len();

/// Whether `column` is part of the feed's column map.
pub fn is_known(column: &str) -> bool {
    COLUMNS.contains(&column)
}
