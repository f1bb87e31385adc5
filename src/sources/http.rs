//! HTTP implementation of the feed sources
//!
//! Fetches the marketplace's static JSON collections. Each endpoint is a
//! JSON array of records; endpoints are same-origin in production, so the
//! base URL plus relative paths are configurable for tests and staging.

use super::{FeedSources, SourceError};
use crate::feed::types::{Ad, AiSuggestion, Auction, LiveTrade, PaidAd};
use crate::telemetry::{record_latency, LatencyMetric};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, Instant};

/// Configuration for the HTTP feed sources
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Origin serving the static JSON files
    pub base_url: String,
    /// Request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_ads_path")]
    pub ads_path: String,
    #[serde(default = "default_paid_ads_path")]
    pub paid_ads_path: String,
    #[serde(default = "default_live_trades_path")]
    pub live_trades_path: String,
    #[serde(default = "default_auctions_path")]
    pub auctions_path: String,
    #[serde(default = "default_ai_fallback_path")]
    pub ai_fallback_path: String,
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_ads_path() -> String {
    "/features/Feed/data/masonryAds.json".to_string()
}
fn default_paid_ads_path() -> String {
    "/features/Feed/data/paidAds.json".to_string()
}
fn default_live_trades_path() -> String {
    "/features/Feed/data/liveTrades.json".to_string()
}
fn default_auctions_path() -> String {
    "/features/Feed/data/auctions.json".to_string()
}
fn default_ai_fallback_path() -> String {
    "/features/Feed/data/aiFeed.json".to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 10,
            ads_path: default_ads_path(),
            paid_ads_path: default_paid_ads_path(),
            live_trades_path: default_live_trades_path(),
            auctions_path: default_auctions_path(),
            ai_fallback_path: default_ai_fallback_path(),
        }
    }
}

/// Client for the marketplace's static JSON endpoints
pub struct HttpFeedSources {
    config: SourcesConfig,
    client: Client,
}

impl HttpFeedSources {
    /// Create a client with the given configuration
    pub fn new(config: SourcesConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Fetch and decode one JSON array endpoint
    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, SourceError> {
        let endpoint = self.url(path);
        let started = Instant::now();

        tracing::debug!(endpoint = %endpoint, "Fetching feed collection");

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|source| SourceError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                endpoint,
                status,
                body,
            });
        }

        let decoded = response
            .json()
            .await
            .map_err(|source| SourceError::Malformed { endpoint, source })?;

        record_latency(LatencyMetric::SourceFetch, started.elapsed());
        Ok(decoded)
    }
}

#[async_trait]
impl FeedSources for HttpFeedSources {
    async fn fetch_ads(&self) -> Result<Vec<Ad>, SourceError> {
        self.fetch_collection(&self.config.ads_path).await
    }

    async fn fetch_paid_ads(&self) -> Result<Vec<PaidAd>, SourceError> {
        self.fetch_collection(&self.config.paid_ads_path).await
    }

    async fn fetch_live_trades(&self) -> Result<Vec<LiveTrade>, SourceError> {
        self.fetch_collection(&self.config.live_trades_path).await
    }

    async fn fetch_auctions(&self) -> Result<Vec<Auction>, SourceError> {
        self.fetch_collection(&self.config.auctions_path).await
    }

    async fn fetch_fallback_suggestions(&self) -> Result<Vec<AiSuggestion>, SourceError> {
        self.fetch_collection(&self.config.ai_fallback_path).await
    }
}
