//! Feed ingestion
//!
//! Turns a raw CSV feed, local or fetched over http(s), into validated
//! records plus a rejection list:
//! - `feed`: CSV parsing and row validation
//! - `http`: feed retrieval over the network
//! - `report`: batch and import summaries

pub mod feed;
pub mod http;
pub mod report;

#[cfg(test)]
mod tests;

pub use feed::{load_feed, parse_feed};
pub use http::fetch_feed;
pub use report::{FeedBatch, ImportReport};

use crate::error::Result;

/// Reads a feed from wherever `source` points: an http(s) URL or a local
/// file path.
pub async fn read_source(source: &str) -> Result<FeedBatch> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_feed(source).await
    } else {
        load_feed(source)
    }
}
