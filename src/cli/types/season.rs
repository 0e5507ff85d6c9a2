//! Season labels scoping imports and queries.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season assumed when neither the flag nor the environment provides one.
pub const DEFAULT_SEASON: &str = "2025-2026";

/// Type-safe wrapper for season labels, e.g. `2025-2026`.
///
/// Labels are free-form tags, not parsed dates; all that is required is a
/// non-blank token without embedded whitespace, so one database can also
/// hold half-season or cup-run imports under labels like `2025-autumn`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(String);

impl Season {
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into().trim().to_string();
        if label.is_empty() || label.chars().any(char::is_whitespace) {
            return Err(StatsError::InvalidSeason { season: label });
        }
        Ok(Self(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(DEFAULT_SEASON.to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Season::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_the_label() {
        let season = Season::new("  2024-2025  ").unwrap();
        assert_eq!(season.as_str(), "2024-2025");
        assert_eq!(season.to_string(), "2024-2025");
    }

    #[test]
    fn test_blank_or_spaced_labels_are_rejected() {
        assert!(Season::new("").is_err());
        assert!(Season::new("   ").is_err());
        assert!(Season::new("2024 2025").is_err());
    }

    #[test]
    fn test_default_and_from_str() {
        assert_eq!(Season::default().as_str(), DEFAULT_SEASON);
        let parsed: Season = "2023-2024".parse().unwrap();
        assert_eq!(parsed, Season::new("2023-2024").unwrap());
    }
}
