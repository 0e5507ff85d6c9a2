//! HTTP retrieval of the statistics feed.

use reqwest::Client;

use super::feed::parse_feed;
use super::report::FeedBatch;
use crate::error::Result;

/// Browser-like user agent; the stats host refuses requests without one.
const FEED_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Fetches a feed over http(s) and parses it.
pub async fn fetch_feed(url: &str) -> Result<FeedBatch> {
    let client = Client::builder().user_agent(FEED_USER_AGENT).build()?;

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse_feed(body.as_bytes())
}
