//! Feed-row validation.
//!
//! Construction never fails fast: structural problems are gathered first in
//! feed column order, then the cross-field consistency rules in a fixed
//! order, and everything is returned together in one [`RowRejection`].

use std::fmt;

use serde::Serialize;

use super::columns;
use super::raw::RawRow;
use super::record::PlayerRecord;

/// Additive cross-checks compare within an absolute floor plus a relative
/// term, so upstream rounding never trips them.
fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 + 1e-4 * a.abs().max(b.abs())
}

/// The feed rounds per-90 rates to two decimals.
const RATE_TOLERANCE: f64 = 1e-2;

/// Classification of a single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    MissingRequiredField,
    InvalidNumericValue,
    InconsistentDerivedMetric,
    FieldCountMismatch,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ViolationKind::MissingRequiredField => "missing required field",
            ViolationKind::InvalidNumericValue => "invalid numeric value",
            ViolationKind::InconsistentDerivedMetric => "inconsistent derived metric",
            ViolationKind::FieldCountMismatch => "field count mismatch",
        };
        f.write_str(text)
    }
}

/// One violated rule, naming the offending column and values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub field: String,
    pub detail: String,
}

impl Violation {
    fn new(kind: ViolationKind, field: impl Into<String>, detail: impl Into<String>) -> Self {
        Violation {
            kind,
            field: field.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.detail)
    }
}

/// Every rule a single feed row violated, reported together so the source
/// can be fixed in one pass. A rejected row is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowRejection {
    /// Player name when the cell was readable, for report attribution.
    pub name: Option<String>,
    /// Ordered: structural problems in feed column order, then the
    /// cross-field rules in their fixed order.
    pub violations: Vec<Violation>,
}

impl RowRejection {
    /// Rejection for a row whose cell count does not match the header.
    pub fn field_count(name: Option<String>, expected: usize, found: usize) -> Self {
        RowRejection {
            name,
            violations: vec![Violation::new(
                ViolationKind::FieldCountMismatch,
                "row",
                format!("expected {expected} columns, found {found}"),
            )],
        }
    }
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("<unnamed row>");
        let details: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        write!(f, "{}: {}", name, details.join("; "))
    }
}

impl std::error::Error for RowRejection {}

/// Pulls typed values out of a raw row, recording a violation for every
/// cell that fails its structural rule. A flagged cell reads as absent so
/// the cross-field rules never run on garbage.
struct RowReader<'a> {
    row: &'a RawRow,
    violations: Vec<Violation>,
}

impl<'a> RowReader<'a> {
    fn new(row: &'a RawRow) -> Self {
        RowReader {
            row,
            violations: Vec::new(),
        }
    }

    fn flag(&mut self, kind: ViolationKind, field: &str, detail: impl Into<String>) {
        self.violations.push(Violation::new(kind, field, detail));
    }

    /// Trimmed cell text; an empty or missing cell means the field is absent.
    fn cell(&self, column: &str) -> Option<&'a str> {
        self.row
            .get(column)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
    }

    fn text(&mut self, column: &str) -> Option<String> {
        self.cell(column).map(str::to_owned)
    }

    /// Whole-number counter. Integral float text like `23.0` is accepted
    /// since the feed pipeline casts counter columns through floats.
    fn count(&mut self, column: &str) -> Option<u32> {
        let cell = self.cell(column)?;
        if let Ok(value) = cell.parse::<u32>() {
            return Some(value);
        }
        match cell.parse::<f64>() {
            Ok(value) if !value.is_finite() => {
                self.flag(
                    ViolationKind::InvalidNumericValue,
                    column,
                    format!("not a finite number: {cell}"),
                );
            }
            Ok(value) if value < 0.0 => {
                self.flag(
                    ViolationKind::InvalidNumericValue,
                    column,
                    format!("negative count: {cell}"),
                );
            }
            Ok(value) if value.fract() == 0.0 && value <= u32::MAX as f64 => {
                return Some(value as u32);
            }
            Ok(value) if value.fract() != 0.0 => {
                self.flag(
                    ViolationKind::InvalidNumericValue,
                    column,
                    format!("expected a whole number, found {cell}"),
                );
            }
            Ok(_) => {
                self.flag(
                    ViolationKind::InvalidNumericValue,
                    column,
                    format!("count out of range: {cell}"),
                );
            }
            Err(_) => {
                self.flag(
                    ViolationKind::InvalidNumericValue,
                    column,
                    format!("not a number: {cell}"),
                );
            }
        }
        None
    }

    /// Non-negative total or counter-like stat.
    fn number(&mut self, column: &str) -> Option<f64> {
        let value = self.finite(column)?;
        if value < 0.0 {
            self.flag(
                ViolationKind::InvalidNumericValue,
                column,
                format!("negative value: {value}"),
            );
            return None;
        }
        Some(value)
    }

    /// Per-90 rate: must be finite, but a negative value is tolerated as a
    /// feed anomaly rather than rejected outright.
    fn rate(&mut self, column: &str) -> Option<f64> {
        self.finite(column)
    }

    fn finite(&mut self, column: &str) -> Option<f64> {
        let cell = self.cell(column)?;
        match cell.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            Ok(_) => {
                self.flag(
                    ViolationKind::InvalidNumericValue,
                    column,
                    format!("not a finite number: {cell}"),
                );
                None
            }
            Err(_) => {
                self.flag(
                    ViolationKind::InvalidNumericValue,
                    column,
                    format!("not a number: {cell}"),
                );
                None
            }
        }
    }

    /// A per-90 rate must agree with its total spread over `nineties`.
    fn check_rate(
        &mut self,
        field: &str,
        rate: Option<f64>,
        source: &str,
        total: Option<f64>,
        nineties: f64,
    ) {
        if let (Some(rate), Some(total)) = (rate, total) {
            let expected = total / nineties;
            if (rate - expected).abs() > RATE_TOLERANCE {
                self.flag(
                    ViolationKind::InconsistentDerivedMetric,
                    field,
                    format!("{rate} does not match {source} {total} over {nineties} nineties"),
                );
            }
        }
    }
}

pub(super) fn build_record(row: &RawRow) -> Result<PlayerRecord, RowRejection> {
    let mut r = RowReader::new(row);

    let name = r.text(columns::PLAYER);
    if name.is_none() {
        r.flag(
            ViolationKind::MissingRequiredField,
            columns::PLAYER,
            "name is required and must be non-blank",
        );
    }
    let nation = r.text("nation");
    let pos = r.text("pos");
    let age = r.count("age");
    let mp = r.count("mp");
    let starts = r.count("starts");
    let min = r.number("min");
    let nineties = r.number("nineties");
    let gls = r.number("gls");
    let ast = r.number("ast");
    let g_a = r.number("g_a");
    let gpk = r.number("gpk");
    let pk = r.number("pk");
    let pkatt = r.number("pkatt");
    let crdy = r.number("crdy");
    let crdr = r.number("crdr");
    let xg = r.number("xg");
    let npxg = r.number("npxg");
    let xag = r.number("xag");
    let npxg_xag = r.number("npxg_xag");
    let prgc = r.number("prgc");
    let prgp = r.number("prgp");
    let prgr = r.number("prgr");
    let gls_1 = r.rate("gls_1");
    let ast_1 = r.rate("ast_1");
    let g_a_1 = r.rate("g_a_1");
    let gpk_1 = r.rate("gpk_1");
    let g_apk = r.rate("g_apk");
    let xg_1 = r.rate("xg_1");
    let xag_1 = r.rate("xag_1");
    let xg_xag = r.rate("xg_xag");
    let npxg_1 = r.rate("npxg_1");
    let npxg_xag_1 = r.rate("npxg_xag_1");
    let matches = r.text("matches");
    let team = r.text("team");

    // Cross-field rules run only when every involved field is present;
    // an absent field makes a rule not applicable, it never stands in for
    // a zero.
    if let (Some(sum), Some(gls_v), Some(ast_v)) = (g_a, gls, ast) {
        if !nearly_equal(sum, gls_v + ast_v) {
            r.flag(
                ViolationKind::InconsistentDerivedMetric,
                "g_a",
                format!("{sum} does not equal gls {gls_v} + ast {ast_v}"),
            );
        }
    }
    if let (Some(gpk_v), Some(gls_v), Some(pk_v)) = (gpk, gls, pk) {
        if !nearly_equal(gpk_v, gls_v - pk_v) {
            r.flag(
                ViolationKind::InconsistentDerivedMetric,
                "gpk",
                format!("{gpk_v} does not equal gls {gls_v} - pk {pk_v}"),
            );
        }
    }
    if let (Some(pk_v), Some(pkatt_v)) = (pk, pkatt) {
        if pk_v > pkatt_v {
            r.flag(
                ViolationKind::InconsistentDerivedMetric,
                "pk",
                format!("{pk_v} exceeds pkatt {pkatt_v}"),
            );
        }
    }
    if let (Some(sum), Some(npxg_v), Some(xag_v)) = (npxg_xag, npxg, xag) {
        if !nearly_equal(sum, npxg_v + xag_v) {
            r.flag(
                ViolationKind::InconsistentDerivedMetric,
                "npxg_xag",
                format!("{sum} does not equal npxg {npxg_v} + xag {xag_v}"),
            );
        }
    }
    if let Some(n) = nineties.filter(|n| *n > 0.0) {
        r.check_rate("gls_1", gls_1, "gls", gls, n);
        r.check_rate("ast_1", ast_1, "ast", ast, n);
        r.check_rate("g_a_1", g_a_1, "g_a", g_a, n);
        r.check_rate("gpk_1", gpk_1, "gpk", gpk, n);
        let g_apk_total = match (g_a, pk) {
            (Some(sum), Some(pk_v)) => Some(sum - pk_v),
            _ => None,
        };
        r.check_rate("g_apk", g_apk, "g_a - pk =", g_apk_total, n);
        r.check_rate("xg_1", xg_1, "xg", xg, n);
        r.check_rate("xag_1", xag_1, "xag", xag, n);
        let xg_xag_total = match (xg, xag) {
            (Some(xg_v), Some(xag_v)) => Some(xg_v + xag_v),
            _ => None,
        };
        r.check_rate("xg_xag", xg_xag, "xg + xag =", xg_xag_total, n);
        r.check_rate("npxg_1", npxg_1, "npxg", npxg, n);
        r.check_rate("npxg_xag_1", npxg_xag_1, "npxg_xag", npxg_xag, n);
    }
    if let (Some(starts_v), Some(mp_v)) = (starts, mp) {
        if starts_v > mp_v {
            r.flag(
                ViolationKind::InconsistentDerivedMetric,
                "starts",
                format!("{starts_v} exceeds mp {mp_v}"),
            );
        }
    }

    let violations = r.violations;
    match name {
        Some(name) if violations.is_empty() => Ok(PlayerRecord {
            name,
            nation,
            pos,
            age,
            mp,
            starts,
            min,
            nineties,
            gls,
            ast,
            g_a,
            gpk,
            pk,
            pkatt,
            crdy,
            crdr,
            xg,
            npxg,
            xag,
            npxg_xag,
            prgc,
            prgp,
            prgr,
            gls_1,
            ast_1,
            g_a_1,
            gpk_1,
            g_apk,
            xg_1,
            xag_1,
            xg_xag,
            npxg_1,
            npxg_xag_1,
            matches,
            team,
        }),
        name => Err(RowRejection { name, violations }),
    }
}
