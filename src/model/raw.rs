//! Unvalidated feed rows.

use std::collections::BTreeMap;

/// One feed row as a mapping from column name to raw cell text.
///
/// This is the single input shape for record construction: the CSV reader
/// builds one per data row, and a validated record can emit its own raw form
/// again for round-tripping. Cells are kept verbatim; trimming and the
/// empty-means-absent rule are applied during validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from `(column, value)` pairs, e.g. a header zipped with
    /// one CSV record. Later pairs overwrite earlier ones for the same column.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (column, value) in pairs {
            row.set(column, value);
        }
        row
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_cells() {
        let mut row = RawRow::new();
        row.set("player", "Erling Haaland");
        row.set("gls", "27");

        assert_eq!(row.get("player"), Some("Erling Haaland"));
        assert_eq!(row.get("gls"), Some("27"));
        assert_eq!(row.get("ast"), None);
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn from_pairs_zips_header_and_fields() {
        let header = ["player", "team", "gls"];
        let fields = ["Bukayo Saka", "Arsenal", "14"];
        let row = RawRow::from_pairs(header.iter().copied().zip(fields.iter().copied()));

        assert_eq!(row.get("team"), Some("Arsenal"));
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn later_pairs_overwrite() {
        let row = RawRow::from_pairs([("gls", "1"), ("gls", "2")]);
        assert_eq!(row.get("gls"), Some("2"));
    }
}
