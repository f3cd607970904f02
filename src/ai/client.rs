//! Gemini API client
//!
//! Encapsulates the single outbound `generateContent` call. The client is
//! constructed once at startup and handed to the Presentation Shell; it
//! performs exactly one attempt per summarize call, with no retry state.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use super::Summarizer;
use super::parsing::parse_summaries;
use crate::core::config::AppConfig;
use crate::core::models::{SummarizationRequest, SummaryRecord};
use crate::errors::SummarizeError;
use crate::prompt::build_summary_prompt;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client with the default model and endpoint. A missing key
    /// is accepted here; it fails the first summarize call instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_key: Option<String>) -> Result<Self, SummarizeError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
        })
    }

    /// Creates a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizeError> {
        let mut client = Self::new(config.gemini_api_key.clone())?;
        if let Some(model) = &config.gemini_model {
            client = client.with_model(model);
        }
        if let Some(base_url) = &config.gemini_base_url {
            client = client.with_base_url(base_url);
        }
        Ok(client)
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API endpoint. Exists for tests and proxies.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_generate_request(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, SummarizeError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Gemini API request failed");
            // The service reports a bad key either via the status code or,
            // on some routes, a 400 whose body names the key as invalid.
            if status == StatusCode::UNAUTHORIZED
                || status == StatusCode::FORBIDDEN
                || message.contains("API key not valid")
            {
                return Err(SummarizeError::InvalidApiKey);
            }
            return Err(SummarizeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GenerateContentResponse = response.json().await?;
        response_text(envelope).ok_or(SummarizeError::EmptyResponse)
    }
}

impl Summarizer for GeminiClient {
    async fn summarize(
        &self,
        request: &SummarizationRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<SummaryRecord>, SummarizeError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(SummarizeError::MissingApiKey)?;

        let prompt = build_summary_prompt(request.text(), request.language());
        debug!(
            model = %self.model,
            language = %request.language(),
            "dispatching generateContent request"
        );

        let raw = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(SummarizeError::Cancelled),
            result = self.send_generate_request(api_key, &prompt) => result?,
        };

        parse_summaries(&raw)
            .inspect_err(|e| error!(error = %e, "failed to decode Gemini response"))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

fn response_text(envelope: GenerateContentResponse) -> Option<String> {
    let candidate = envelope.candidates.into_iter().next()?;
    let text: String = candidate
        .content?
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() { None } else { Some(text) }
}
