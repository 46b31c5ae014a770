//! Gemini generate-content HTTP client

use astra_core::config::ProviderConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::base::{ProviderError, ProviderResult};

/// Generate-content request format
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Generate-content response format
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini provider client
pub struct GeminiClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.api_base, self.model)
    }

    /// Send one prompt as the sole text part of a generate-content request
    /// and return the first candidate's reply text, trimmed.
    pub async fn generate(&self, prompt: &str) -> ProviderResult<String> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::Config(
                "no API key configured for the provider".to_string(),
            ));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!(model = %self.model, "Gemini API request");

        let response = self
            .client
            .post(self.api_url())
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Api(format!("HTTP {}: {}", status, error_text)));
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|_| {
            ProviderError::MalformedResponse("invalid JSON response from API".to_string())
        })?;

        Self::extract_text(parsed)
    }

    /// Pull `candidates[0].content.parts[0].text` out of a decoded response.
    fn extract_text(response: GenerateContentResponse) -> ProviderResult<String> {
        let candidate = response.candidates.into_iter().next().ok_or_else(|| {
            ProviderError::MalformedResponse("no candidates in response".to_string())
        })?;

        let part = candidate.content.parts.into_iter().next().ok_or_else(|| {
            ProviderError::MalformedResponse("no parts in candidate content".to_string())
        })?;

        let text = part.text.ok_or_else(|| {
            ProviderError::MalformedResponse("no text in response part".to_string())
        })?;

        Ok(text.trim().to_string())
    }
}
