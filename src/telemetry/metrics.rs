//! Feed composition metrics

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Full composition cycle (fetch + blend + publish)
    ComposeCycle,
    /// One source collection fetch
    SourceFetch,
    /// Generative suggestion call
    AiGeneration,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Items in the published snapshot
    FeedSize,
    /// Ads available before quota capping
    AdsAvailable,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Composition cycle completed and published
    ComposeSuccess,
    /// Composition cycle aborted on a source failure
    ComposeFailure,
    /// Generative call failed or was skipped; static suggestions used
    AiFallback,
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::ComposeCycle => "mazfeed_compose_cycle_latency_ms",
        LatencyMetric::SourceFetch => "mazfeed_source_fetch_latency_ms",
        LatencyMetric::AiGeneration => "mazfeed_ai_generation_latency_ms",
    };

    metrics::histogram!(metric_name).record(duration.as_millis() as f64);
    tracing::debug!(
        metric = metric_name,
        value_ms = duration.as_millis(),
        "Recording latency"
    );
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::FeedSize => "mazfeed_feed_size",
        GaugeMetric::AdsAvailable => "mazfeed_ads_available",
    };

    metrics::gauge!(metric_name).set(value);
    tracing::debug!(metric = metric_name, value = value, "Setting gauge");
}

/// Increment a counter
pub fn increment_counter(metric: CounterMetric) {
    let metric_name = match metric {
        CounterMetric::ComposeSuccess => "mazfeed_compose_success_total",
        CounterMetric::ComposeFailure => "mazfeed_compose_failure_total",
        CounterMetric::AiFallback => "mazfeed_ai_fallback_total",
    };

    metrics::counter!(metric_name).increment(1);
}
