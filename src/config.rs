//! Configuration types for maz-feed

use crate::ai::AiConfig;
use crate::gallery::CarouselConfig;
use crate::sources::SourcesConfig;
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub composer: ComposerConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub gallery: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Feed composition configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ComposerConfig {
    /// Seconds between composition cycles
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    #[serde(default)]
    pub quotas: QuotaConfig,
}

fn default_refresh_interval_secs() -> u64 {
    300 // 5 minutes
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 300,
            quotas: QuotaConfig::default(),
        }
    }
}

/// Per-category item caps for one composition cycle
///
/// The defaults target a ~20 item feed: 60% ads, 10% paid, 15% trades,
/// 10% auctions, 5% AI suggestions.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaConfig {
    #[serde(default = "default_ads_quota")]
    pub ads: usize,
    #[serde(default = "default_paid_ads_quota")]
    pub paid_ads: usize,
    #[serde(default = "default_live_trades_quota")]
    pub live_trades: usize,
    #[serde(default = "default_auctions_quota")]
    pub auctions: usize,
    #[serde(default = "default_ai_quota")]
    pub ai: usize,
}

fn default_ads_quota() -> usize {
    12
}
fn default_paid_ads_quota() -> usize {
    2
}
fn default_live_trades_quota() -> usize {
    3
}
fn default_auctions_quota() -> usize {
    2
}
fn default_ai_quota() -> usize {
    1
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            ads: 12,
            paid_ads: 2,
            live_trades: 3,
            auctions: 2,
            ai: 1,
        }
    }
}

/// UI shell configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Directory holding on-device state (theme preference)
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
    /// Viewport width used for column layout when none is reported
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
}

fn default_state_dir() -> PathBuf {
    PathBuf::from("./state")
}
fn default_viewport_width() -> u32 {
    1280
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            viewport_width: default_viewport_width(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
