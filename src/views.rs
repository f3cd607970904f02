//! Terminal rendering of the Presentation Shell's display modes.

use crate::core::models::SummaryRecord;
use crate::errors::SummarizeError;
use crate::shell::ShellState;

const CARD_RULE_WIDTH: usize = 48;

/// Maps an error to the message shown in the error banner.
///
/// Two cases are rewritten into setup guidance; every other error
/// displays its own message.
#[must_use]
pub fn user_message(error: &SummarizeError) -> String {
    match error {
        SummarizeError::MissingApiKey => {
            "The Gemini API key is not configured. The `GEMINI_API_KEY` environment variable \
             must be available for this application to work. Please check your setup."
                .to_string()
        }
        SummarizeError::InvalidApiKey => {
            "The provided API key is invalid. Please check your configuration.".to_string()
        }
        other => other.to_string(),
    }
}

/// Renders whichever display mode is active.
#[must_use]
pub fn render_state(state: &ShellState) -> String {
    match state {
        ShellState::Idle => render_idle(),
        ShellState::Loading => render_loading(),
        ShellState::Error(message) => render_error(message),
        ShellState::Results(records) => render_results(records),
    }
}

#[must_use]
pub fn render_idle() -> String {
    "Your summaries will appear here\n\
     First a quick definition, then the key information, with a citation score."
        .to_string()
}

#[must_use]
pub fn render_loading() -> String {
    "Summarizing...".to_string()
}

#[must_use]
pub fn render_error(message: &str) -> String {
    format!("Error\n{message}")
}

/// Renders one card per record: the subject definition, the key
/// information, and the citation score with its tier and rationale.
#[must_use]
pub fn render_results(records: &[SummaryRecord]) -> String {
    let mut out = String::new();

    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }

        let title = format!("── Summary {} ", index + 1);
        out.push_str(&title);
        out.push_str(&"─".repeat(CARD_RULE_WIDTH.saturating_sub(title.chars().count())));
        out.push('\n');

        out.push_str("What is it?\n");
        out.push_str(&record.subject_explanation);
        out.push_str("\n\n");

        out.push_str("Key Information\n");
        out.push_str(&record.detailed_summary);
        out.push_str("\n\n");

        out.push_str(&format!(
            "Citation Score: {} ({})\n",
            record.citation_worthiness_score,
            record.score_tier().label()
        ));
        out.push_str(&format!(
            "Scoring Rationale: {}\n",
            record.score_justification
        ));
    }

    out
}
