//! All AI/LLM functionality

pub mod client;
pub mod parsing;

// Re-export main types for convenience
pub use client::{DEFAULT_MODEL, GeminiClient};
pub use parsing::{parse_summaries, strip_code_fences};

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::core::models::{SummarizationRequest, SummaryRecord};
use crate::errors::SummarizeError;

/// The seam between the Presentation Shell and the remote service.
///
/// One call is one attempt: implementations must not retry. The token is
/// watched while the call is in flight; a cancelled token settles the
/// call with [`SummarizeError::Cancelled`].
pub trait Summarizer {
    fn summarize(
        &self,
        request: &SummarizationRequest,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<Vec<SummaryRecord>, SummarizeError>> + Send;
}
