//! Feed data sources
//!
//! Read-only JSON collections the composer blends: ad listings, paid-ad
//! listings, live trades, auctions, and the static AI-suggestion
//! fallback file.

mod http;

pub use http::{HttpFeedSources, SourcesConfig};

use crate::feed::types::{Ad, AiSuggestion, Auction, LiveTrade, PaidAd};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from a feed data source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// Non-2xx status from the endpoint
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    },
    /// Body was not a valid JSON array of the expected shape
    #[error("{endpoint} returned malformed JSON: {source}")]
    Malformed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Trait for the composer's data sources
///
/// The HTTP implementation talks to the marketplace's static endpoints;
/// tests substitute in-memory fixtures.
#[async_trait]
pub trait FeedSources: Send + Sync {
    async fn fetch_ads(&self) -> Result<Vec<Ad>, SourceError>;
    async fn fetch_paid_ads(&self) -> Result<Vec<PaidAd>, SourceError>;
    async fn fetch_live_trades(&self) -> Result<Vec<LiveTrade>, SourceError>;
    async fn fetch_auctions(&self) -> Result<Vec<Auction>, SourceError>;
    /// Static suggestion file used when the generative service is
    /// unavailable or errors
    async fn fetch_fallback_suggestions(&self) -> Result<Vec<AiSuggestion>, SourceError>;
}
