use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("API key rejected by the Gemini API")]
    InvalidApiKey,

    #[error("The API did not return a summary. The content might be empty or invalid.")]
    EmptyResponse,

    #[error("{0}")]
    MalformedResponse(String),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to send HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("summarization request was cancelled")]
    Cancelled,
}

impl SummarizeError {
    /// Malformed-response error pointing at one field of the decoded
    /// document, e.g. `summaries[1].citationWorthinessScore`.
    pub fn malformed_field(path: &str, problem: &str) -> Self {
        SummarizeError::MalformedResponse(format!("{path}: {problem}"))
    }
}
