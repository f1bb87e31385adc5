//! Feed composition
//!
//! One composition cycle fetches the four JSON collections in parallel,
//! obtains exactly one AI suggestion (generated or static fallback),
//! caps each category at its quota, and shuffles the blend before
//! publishing. A failed cycle leaves the previous snapshot in place.

use super::types::FeedItem;
use crate::ai::SuggestionProvider;
use crate::config::ComposerConfig;
use crate::sources::FeedSources;
use crate::telemetry::{
    increment_counter, record_latency, set_gauge, CounterMetric, GaugeMetric, LatencyMetric,
};
use rand::seq::{IndexedRandom, SliceRandom};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// The published feed state
///
/// `is_loading` is true only while a cycle is in flight, including the
/// first load. Items are replaced atomically on success; readers never
/// see a partial blend.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub items: Vec<FeedItem>,
    pub is_loading: bool,
}

/// Blends the marketplace sources into one shuffled feed
pub struct FeedComposer {
    sources: Arc<dyn FeedSources>,
    suggestions: SuggestionProvider,
    config: ComposerConfig,
}

impl FeedComposer {
    pub fn new(
        sources: Arc<dyn FeedSources>,
        suggestions: SuggestionProvider,
        config: ComposerConfig,
    ) -> Self {
        Self {
            sources,
            suggestions,
            config,
        }
    }

    /// Run one composition cycle
    ///
    /// All four collection fetches must succeed; any failure aborts the
    /// cycle. The AI path degrades to the static fallback internally and
    /// only the fallback fetch itself can fail here.
    pub async fn compose_once(&self) -> anyhow::Result<Vec<FeedItem>> {
        let started = Instant::now();

        let (ads, paid_ads, live_trades, auctions) = tokio::try_join!(
            self.sources.fetch_ads(),
            self.sources.fetch_paid_ads(),
            self.sources.fetch_live_trades(),
            self.sources.fetch_auctions(),
        )?;

        set_gauge(GaugeMetric::AdsAvailable, ads.len() as f64);

        // Random context ad steers the generated suggestion; an empty ads
        // source skips generation and uses the static file directly.
        let context = ads.choose(&mut rand::rng()).cloned();
        let suggestions = self
            .suggestions
            .suggest(context.as_ref(), self.sources.as_ref())
            .await?;

        let quotas = &self.config.quotas;
        let mut items: Vec<FeedItem> = Vec::new();
        items.extend(ads.into_iter().take(quotas.ads).map(FeedItem::from_ad));
        items.extend(
            paid_ads
                .into_iter()
                .take(quotas.paid_ads)
                .map(FeedItem::from_paid),
        );
        items.extend(
            live_trades
                .into_iter()
                .take(quotas.live_trades)
                .map(FeedItem::from_trade),
        );
        items.extend(
            auctions
                .into_iter()
                .take(quotas.auctions)
                .map(FeedItem::from_auction),
        );
        items.extend(
            suggestions
                .into_iter()
                .take(quotas.ai)
                .map(FeedItem::from_suggestion),
        );

        // Fisher-Yates; "popular" sort order is exactly this shuffle
        items.shuffle(&mut rand::rng());

        record_latency(LatencyMetric::ComposeCycle, started.elapsed());
        set_gauge(GaugeMetric::FeedSize, items.len() as f64);

        Ok(items)
    }

    /// Start the recurring composition loop
    ///
    /// Composes immediately, then re-runs after each `refresh_interval`.
    /// The loop awaits each cycle before sleeping, so cycles never
    /// overlap. Stop the handle on teardown.
    pub fn spawn(self) -> FeedHandle {
        let interval = Duration::from_secs(self.config.refresh_interval_secs);
        let (tx, rx) = watch::channel(FeedSnapshot {
            items: Vec::new(),
            is_loading: true,
        });

        let handle = tokio::spawn(async move {
            loop {
                tx.send_modify(|snapshot| snapshot.is_loading = true);

                match self.compose_once().await {
                    Ok(items) => {
                        tracing::info!(item_count = items.len(), "Feed composed");
                        increment_counter(CounterMetric::ComposeSuccess);
                        let _ = tx.send(FeedSnapshot {
                            items,
                            is_loading: false,
                        });
                    }
                    Err(error) => {
                        // Previous items stay published
                        tracing::error!(%error, "Failed to compose feed");
                        increment_counter(CounterMetric::ComposeFailure);
                        tx.send_modify(|snapshot| snapshot.is_loading = false);
                    }
                }

                tokio::time::sleep(interval).await;
            }
        });

        FeedHandle { rx, handle }
    }
}

/// Handle to a running composition loop
pub struct FeedHandle {
    rx: watch::Receiver<FeedSnapshot>,
    handle: JoinHandle<()>,
}

impl FeedHandle {
    /// Current snapshot (clone of the latest published value)
    pub fn snapshot(&self) -> FeedSnapshot {
        self.rx.borrow().clone()
    }

    /// Receiver for awaiting publishes
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.rx.clone()
    }

    /// Cancel the refresh timer and the in-flight cycle, if any
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
