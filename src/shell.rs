//! Presentation Shell: the UI state machine.
//!
//! Owns the display state and drives the injected [`Summarizer`]. At most
//! one submission is outstanding at a time; a superseded or torn-down
//! submission is discarded when it settles instead of being applied.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::ai::Summarizer;
use crate::core::models::{Language, SummarizationRequest, SummaryRecord};
use crate::errors::SummarizeError;
use crate::views;

/// Inline validation message for an empty or all-whitespace submission.
pub const EMPTY_INPUT_NOTICE: &str = "Please paste some text to summarize.";

/// The mutually exclusive display modes. Loading can never coexist with
/// an error or with results because the variants carry the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    Loading,
    Error(String),
    Results(Vec<SummaryRecord>),
}

/// A submission that has been issued but not yet settled.
#[derive(Debug)]
pub struct Pending {
    request: SummarizationRequest,
    token: CancellationToken,
}

impl Pending {
    #[must_use]
    pub fn request(&self) -> &SummarizationRequest {
        &self.request
    }

    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

pub struct Shell<S> {
    summarizer: S,
    language: Language,
    state: ShellState,
    notice: Option<String>,
    session: CancellationToken,
    current: CancellationToken,
}

impl<S: Summarizer> Shell<S> {
    #[must_use]
    pub fn new(summarizer: S, language: Language) -> Self {
        let session = CancellationToken::new();
        let current = session.child_token();
        Self {
            summarizer,
            language,
            state: ShellState::Idle,
            notice: None,
            session,
            current,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// The current inline validation message, if any. It coexists with
    /// every display mode and clears on the next valid submission.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Validates and issues a submission.
    ///
    /// Empty or all-whitespace text sets the validation notice, leaves the
    /// current display mode untouched, and returns `None`; the remote
    /// service is never invoked. Valid text clears prior error/results by
    /// entering Loading, cancels any previously issued submission, and
    /// returns the new [`Pending`].
    pub fn submit(&mut self, text: &str) -> Option<Pending> {
        let Some(request) = SummarizationRequest::new(text, self.language) else {
            self.notice = Some(EMPTY_INPUT_NOTICE.to_string());
            return None;
        };

        self.notice = None;
        self.current.cancel();
        self.current = self.session.child_token();
        self.state = ShellState::Loading;

        Some(Pending {
            request,
            token: self.current.clone(),
        })
    }

    /// Runs the injected summarizer for an issued submission.
    pub async fn run(&self, pending: &Pending) -> Result<Vec<SummaryRecord>, SummarizeError> {
        self.summarizer
            .summarize(&pending.request, &pending.token)
            .await
    }

    /// Applies a settled outcome. An outcome whose submission was
    /// superseded or torn down is discarded without touching state.
    pub fn settle(
        &mut self,
        pending: Pending,
        outcome: Result<Vec<SummaryRecord>, SummarizeError>,
    ) {
        if pending.token.is_cancelled() {
            debug!("discarding outcome of a cancelled submission");
            return;
        }

        match outcome {
            Ok(records) => self.state = ShellState::Results(records),
            Err(SummarizeError::Cancelled) => {
                debug!("discarding cancelled submission");
            }
            Err(e) => self.state = ShellState::Error(views::user_message(&e)),
        }
    }

    /// Teardown guard: cancels the session so an in-flight submission is
    /// discarded when it settles.
    pub fn shutdown(&self) {
        self.session.cancel();
    }
}
