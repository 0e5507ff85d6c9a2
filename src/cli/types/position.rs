//! Player position types and utilities.

use crate::error::StatsError;
use std::fmt;
use std::str::FromStr;

/// Goalkeeper and outfield position codes as the feed reports them.
///
/// A feed row's `pos` cell carries one code or a comma-joined listing such
/// as `MF,FW` for players fielded in more than one role;
/// [`Position::matches`] checks membership in such a listing, which is what
/// the position filter uses.
///
/// # Examples
///
/// ```rust
/// use pl_stats::Position;
///
/// let fw = Position::FW;
/// assert_eq!(fw.to_string(), "FW");
/// assert!(fw.matches("MF,FW"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    GK,
    DF,
    MF,
    FW,
}

impl Position {
    /// The feed's code for this position.
    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DF => "DF",
            Position::MF => "MF",
            Position::FW => "FW",
        }
    }

    /// Whether a feed `pos` cell lists this position: `FW` matches both
    /// `FW` and `MF,FW`, but not `MF`.
    pub fn matches(&self, pos_cell: &str) -> bool {
        pos_cell
            .split(',')
            .any(|code| code.trim().eq_ignore_ascii_case(self.code()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Position {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "GOALKEEPER" => Ok(Position::GK),
            "DF" | "DEF" | "DEFENDER" => Ok(Position::DF),
            "MF" | "MID" | "MIDFIELDER" => Ok(Position::MF),
            "FW" | "FWD" | "FORWARD" | "STRIKER" => Ok(Position::FW),
            _ => Err(StatsError::InvalidPosition {
                position: s.trim().to_string(),
            }),
        }
    }
}
