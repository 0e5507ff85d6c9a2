//! The validated player season record.

use serde::Serialize;

use super::columns;
use super::raw::RawRow;
use super::validate::{self, RowRejection};

/// One player's aggregated statistics for a tracked span of matches (a
/// season or partial season).
///
/// Values of this type only come out of [`PlayerRecord::from_raw`], which
/// runs the full consistency check over the feed row, so a `PlayerRecord`
/// always satisfies the cross-field rules (derived totals add up, per-90
/// rates agree with their totals, penalties made never exceed attempts, and
/// so on). Every attribute except the player name may be absent; absence is
/// preserved as `None`, never defaulted to zero.
///
/// Serialization uses the feed's exact column names as keys and omits absent
/// fields, so a serialized record parses straight back through `from_raw`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    #[serde(rename = "player")]
    pub(super) name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) nation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) pos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) mp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) starts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) nineties: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) gls: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) ast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) g_a: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) gpk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) pk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) pkatt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) crdy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) crdr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) xg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) npxg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) xag: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) npxg_xag: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) prgc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) prgp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) prgr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) gls_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) ast_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) g_a_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) gpk_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) g_apk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) xg_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) xag_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) xg_xag: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) npxg_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) npxg_xag_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) matches: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) team: Option<String>,
}

impl PlayerRecord {
    /// Validates one raw feed row.
    ///
    /// This is the only way to obtain a `PlayerRecord`. Structural problems
    /// (blank name, unparseable or negative numbers) and cross-field
    /// inconsistencies are all collected into the returned [`RowRejection`]
    /// rather than failing on the first one, so a batch importer can report
    /// everything wrong with a row at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use pl_stats::model::{PlayerRecord, RawRow};
    ///
    /// let row = RawRow::from_pairs([
    ///     ("player", "Test Player"),
    ///     ("gls", "10"),
    ///     ("ast", "5"),
    ///     ("g_a", "15"),
    /// ]);
    /// let record = PlayerRecord::from_raw(&row).unwrap();
    /// assert_eq!(record.name(), "Test Player");
    /// assert_eq!(record.g_a(), Some(15.0));
    /// ```
    pub fn from_raw(row: &RawRow) -> Result<Self, RowRejection> {
        validate::build_record(row)
    }

    /// Emits the record back as its raw feed form, using the fixed column
    /// names. Numbers use the shortest decimal form that parses back to the
    /// same value, so `from_raw(&record.to_raw())` reproduces the record.
    pub fn to_raw(&self) -> RawRow {
        let mut row = RawRow::new();
        row.set(columns::PLAYER, self.name.as_str());
        set_text(&mut row, "nation", &self.nation);
        set_text(&mut row, "pos", &self.pos);
        set_count(&mut row, "age", self.age);
        set_count(&mut row, "mp", self.mp);
        set_count(&mut row, "starts", self.starts);
        set_num(&mut row, "min", self.min);
        set_num(&mut row, "nineties", self.nineties);
        set_num(&mut row, "gls", self.gls);
        set_num(&mut row, "ast", self.ast);
        set_num(&mut row, "g_a", self.g_a);
        set_num(&mut row, "gpk", self.gpk);
        set_num(&mut row, "pk", self.pk);
        set_num(&mut row, "pkatt", self.pkatt);
        set_num(&mut row, "crdy", self.crdy);
        set_num(&mut row, "crdr", self.crdr);
        set_num(&mut row, "xg", self.xg);
        set_num(&mut row, "npxg", self.npxg);
        set_num(&mut row, "xag", self.xag);
        set_num(&mut row, "npxg_xag", self.npxg_xag);
        set_num(&mut row, "prgc", self.prgc);
        set_num(&mut row, "prgp", self.prgp);
        set_num(&mut row, "prgr", self.prgr);
        set_num(&mut row, "gls_1", self.gls_1);
        set_num(&mut row, "ast_1", self.ast_1);
        set_num(&mut row, "g_a_1", self.g_a_1);
        set_num(&mut row, "gpk_1", self.gpk_1);
        set_num(&mut row, "g_apk", self.g_apk);
        set_num(&mut row, "xg_1", self.xg_1);
        set_num(&mut row, "xag_1", self.xag_1);
        set_num(&mut row, "xg_xag", self.xg_xag);
        set_num(&mut row, "npxg_1", self.npxg_1);
        set_num(&mut row, "npxg_xag_1", self.npxg_xag_1);
        set_text(&mut row, "matches", &self.matches);
        set_text(&mut row, "team", &self.team);
        row
    }

    /// Whether two records describe the same logical player: trimmed,
    /// case-sensitive name match. Value equality (`==`) compares every
    /// attribute instead.
    pub fn same_player(&self, other: &PlayerRecord) -> bool {
        self.name == other.name
    }

    /// Trimmed player name, the record's logical key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nation(&self) -> Option<&str> {
        self.nation.as_deref()
    }

    /// Position code(s) as the feed reports them, e.g. `DF` or `MF,FW`.
    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn mp(&self) -> Option<u32> {
        self.mp
    }

    pub fn starts(&self) -> Option<u32> {
        self.starts
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Match-equivalents played: minutes divided by ninety.
    pub fn nineties(&self) -> Option<f64> {
        self.nineties
    }

    pub fn gls(&self) -> Option<f64> {
        self.gls
    }

    pub fn ast(&self) -> Option<f64> {
        self.ast
    }

    /// Goals plus assists.
    pub fn g_a(&self) -> Option<f64> {
        self.g_a
    }

    /// Non-penalty goals.
    pub fn gpk(&self) -> Option<f64> {
        self.gpk
    }

    pub fn pk(&self) -> Option<f64> {
        self.pk
    }

    pub fn pkatt(&self) -> Option<f64> {
        self.pkatt
    }

    pub fn crdy(&self) -> Option<f64> {
        self.crdy
    }

    pub fn crdr(&self) -> Option<f64> {
        self.crdr
    }

    pub fn xg(&self) -> Option<f64> {
        self.xg
    }

    pub fn npxg(&self) -> Option<f64> {
        self.npxg
    }

    pub fn xag(&self) -> Option<f64> {
        self.xag
    }

    pub fn npxg_xag(&self) -> Option<f64> {
        self.npxg_xag
    }

    pub fn prgc(&self) -> Option<f64> {
        self.prgc
    }

    pub fn prgp(&self) -> Option<f64> {
        self.prgp
    }

    pub fn prgr(&self) -> Option<f64> {
        self.prgr
    }

    pub fn gls_1(&self) -> Option<f64> {
        self.gls_1
    }

    pub fn ast_1(&self) -> Option<f64> {
        self.ast_1
    }

    pub fn g_a_1(&self) -> Option<f64> {
        self.g_a_1
    }

    pub fn gpk_1(&self) -> Option<f64> {
        self.gpk_1
    }

    /// Goals plus assists minus penalty goals, per 90.
    pub fn g_apk(&self) -> Option<f64> {
        self.g_apk
    }

    pub fn xg_1(&self) -> Option<f64> {
        self.xg_1
    }

    pub fn xag_1(&self) -> Option<f64> {
        self.xag_1
    }

    /// Expected goals plus expected assisted goals, per 90.
    pub fn xg_xag(&self) -> Option<f64> {
        self.xg_xag
    }

    pub fn npxg_1(&self) -> Option<f64> {
        self.npxg_1
    }

    pub fn npxg_xag_1(&self) -> Option<f64> {
        self.npxg_xag_1
    }

    /// Free-text descriptor of the match set the feed covered.
    pub fn matches(&self) -> Option<&str> {
        self.matches.as_deref()
    }

    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }
}

fn set_text(row: &mut RawRow, column: &str, value: &Option<String>) {
    if let Some(v) = value {
        row.set(column, v.as_str());
    }
}

fn set_count(row: &mut RawRow, column: &str, value: Option<u32>) {
    if let Some(v) = value {
        row.set(column, v.to_string());
    }
}

fn set_num(row: &mut RawRow, column: &str, value: Option<f64>) {
    if let Some(v) = value {
        row.set(column, v.to_string());
    }
}

#[cfg(test)]
mod tests;
