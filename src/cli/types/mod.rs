//! Type-safe wrappers and enums for the command-line surface.

pub mod position;
pub mod season;

pub use position::Position;
pub use season::{Season, DEFAULT_SEASON};
