use std::env;

/// Process-wide configuration, resolved from the environment once at
/// startup. Every field is optional: a missing API key is not a startup
/// error, it surfaces as `SummarizeError::MissingApiKey` on the first
/// summarize call.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_base_url: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            gemini_model: env::var("GEMINI_MODEL").ok(),
            gemini_base_url: env::var("GEMINI_BASE_URL").ok(),
        }
    }
}
