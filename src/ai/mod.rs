//! AI suggestion generation
//!
//! One suggestion per composition cycle, generated from a context ad when
//! an API key is configured; otherwise (or on any failure) sourced from
//! the static fallback file. Generation failure is never fatal to a
//! cycle — only the fallback fetch itself can fail, and that carries the
//! same semantics as any other core source.

mod client;
mod types;

pub use client::{GenAiClient, DEFAULT_MODEL, GENAI_API_URL};
pub use types::{GenerateContentRequest, GenerateContentResponse, SuggestionDraft};

use crate::feed::types::{Ad, AiSuggestion};
use crate::sources::{FeedSources, SourceError};
use crate::telemetry::{increment_counter, CounterMetric};
use chrono::Utc;
use serde::Deserialize;

/// Generative service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key; when absent every cycle uses the static fallback
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_base_url() -> String {
    GENAI_API_URL.to_string()
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

/// Produces the cycle's AI suggestions, falling back to the static file
pub struct SuggestionProvider {
    client: Option<GenAiClient>,
}

impl SuggestionProvider {
    /// Build from config; no API key means fallback-only operation
    pub fn from_config(config: &AiConfig) -> Self {
        let client = config.api_key.as_ref().map(|key| {
            GenAiClient::new(key, &config.model).with_base_url(&config.base_url)
        });

        if client.is_none() {
            tracing::warn!("No generative API key configured; using static AI suggestions");
        }

        Self { client }
    }

    /// Provider that never calls the generative service
    pub fn fallback_only() -> Self {
        Self { client: None }
    }

    /// Whether a generative client is configured
    pub fn is_generative(&self) -> bool {
        self.client.is_some()
    }

    /// Obtain suggestions for this cycle
    ///
    /// `context` is a randomly picked ad from the current fetch; `None`
    /// when the ads source was empty, which skips the generative call.
    pub async fn suggest(
        &self,
        context: Option<&Ad>,
        fallback: &dyn FeedSources,
    ) -> Result<Vec<AiSuggestion>, SourceError> {
        if let Some(client) = &self.client {
            if let Some(ad) = context {
                match client.generate_suggestions(ad).await {
                    Ok(drafts) if !drafts.is_empty() => {
                        return Ok(Self::assign_ids(ad, drafts));
                    }
                    Ok(_) => {
                        tracing::warn!(context_ad = %ad.id, "Generative API returned no suggestions");
                    }
                    Err(error) => {
                        tracing::error!(context_ad = %ad.id, %error, "AI suggestion generation failed");
                    }
                }
            } else {
                tracing::warn!("No context ad available; skipping generation");
            }
            increment_counter(CounterMetric::AiFallback);
        }

        fallback.fetch_fallback_suggestions().await
    }

    /// Derive unique ids from the context ad, draft index, and wall clock
    /// so repeated cycles never collide
    fn assign_ids(context: &Ad, drafts: Vec<SuggestionDraft>) -> Vec<AiSuggestion> {
        let now_millis = Utc::now().timestamp_millis();
        drafts
            .into_iter()
            .enumerate()
            .map(|(i, draft)| AiSuggestion {
                id: format!("ai_{}_{}_{}", context.id, i, now_millis),
                title: draft.title,
                description: draft.description,
                reason: draft.reason,
            })
            .collect()
    }
}
