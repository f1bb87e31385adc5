//! Generative-language API client
//!
//! Asks the model for exactly one marketplace suggestion, constrained to
//! a fixed JSON schema (an array of one object with required string
//! fields `title`, `description`, `reason`). The response text is parsed
//! as JSON; any transport, status, or parse failure surfaces as an error
//! so the caller can fall back to the static suggestion file.

use super::types::{GenerateContentRequest, GenerateContentResponse, SuggestionDraft};
use crate::feed::types::Ad;
use crate::telemetry::{record_latency, LatencyMetric};
use anyhow::anyhow;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Generative-language API base URL
pub const GENAI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model for suggestion generation
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Client for the generative-language service
pub struct GenAiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GenAiClient {
    /// Create a client for the given API key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: GENAI_API_URL.to_string(),
            client,
        }
    }

    /// Override the API origin (tests, proxies)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Prompt asking for one suggestion based on a recently viewed ad
    fn build_prompt(context: &Ad) -> String {
        format!(
            "You are an AI assistant for a P2P marketplace called MAZDADY. \
             Your goal is to create engaging suggestions to help users discover new things. \
             Based on a user's recent interest in '{}', generate 1 creative suggestion for them to explore. \
             For the suggestion, provide a catchy 'title', a brief 'description', and a 'reason' \
             explaining why it's recommended. The reason should be phrased like 'Because you viewed...'. \
             Return the result as a JSON array containing a single object.",
            context.title
        )
    }

    /// Response schema: array of one object with three required strings
    fn suggestion_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "title": {
                        "type": "STRING",
                        "description": "A catchy title for the suggestion card."
                    },
                    "description": {
                        "type": "STRING",
                        "description": "A brief, engaging description of what the user can explore."
                    },
                    "reason": {
                        "type": "STRING",
                        "description": "A short sentence explaining why this is suggested, starting with \"Because you...\""
                    }
                },
                "required": ["title", "description", "reason"]
            }
        })
    }

    /// Generate suggestion drafts for the given context ad
    pub async fn generate_suggestions(&self, context: &Ad) -> anyhow::Result<Vec<SuggestionDraft>> {
        let url = self.endpoint();
        let started = Instant::now();
        let request =
            GenerateContentRequest::json_prompt(Self::build_prompt(context), Self::suggestion_schema());

        tracing::debug!(model = %self.model, context_ad = %context.id, "Generating AI suggestion");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Generative API error ({}): {}", status, body);
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body
            .first_text()
            .ok_or_else(|| anyhow!("Generative API returned no candidates"))?;

        let drafts: Vec<SuggestionDraft> = serde_json::from_str(text)?;

        record_latency(LatencyMetric::AiGeneration, started.elapsed());
        Ok(drafts)
    }
}
