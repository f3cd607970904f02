use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;
use trisum::ai::Summarizer;
use trisum::core::models::{Language, ScoreTier, SummarizationRequest, SummaryRecord};
use trisum::errors::SummarizeError;
use trisum::shell::{EMPTY_INPUT_NOTICE, Shell, ShellState};

#[derive(Clone)]
struct MockSummarizer {
    records: Vec<SummaryRecord>,
    fail_with: Option<fn() -> SummarizeError>,
    calls: Arc<Mutex<Vec<SummarizationRequest>>>,
}

impl MockSummarizer {
    fn new(records: Vec<SummaryRecord>) -> Self {
        Self {
            records,
            fail_with: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(fail_with: fn() -> SummarizeError) -> Self {
        Self {
            records: Vec::new(),
            fail_with: Some(fail_with),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        request: &SummarizationRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<SummaryRecord>, SummarizeError> {
        self.calls.lock().unwrap().push(request.clone());
        if cancel.is_cancelled() {
            return Err(SummarizeError::Cancelled);
        }
        if let Some(fail) = self.fail_with {
            return Err(fail());
        }
        Ok(self.records.clone())
    }
}

fn record(subject: &str, score: u8) -> SummaryRecord {
    SummaryRecord {
        subject_explanation: subject.to_string(),
        detailed_summary: format!("{subject} Key facts follow."),
        citation_worthiness_score: score,
        score_justification: "Fact-dense and neutral.".to_string(),
    }
}

fn three_records() -> Vec<SummaryRecord> {
    vec![
        record("Schwannomatosis is a rare genetic disorder.", 85),
        record("Schwannomatosis causes benign nerve tumors.", 72),
        record("Schwannomatosis research is ongoing.", 41),
    ]
}

// ─── Transitions ─────────────────────────────────────────────────────────────

#[test]
fn test_initial_state_is_idle() {
    let shell = Shell::new(MockSummarizer::new(three_records()), Language::English);
    assert_eq!(*shell.state(), ShellState::Idle);
    assert!(shell.notice().is_none());
    assert_eq!(shell.language(), Language::English);
}

#[tokio::test]
async fn test_valid_submit_goes_loading_then_results() {
    let summarizer = MockSummarizer::new(three_records());
    let calls = summarizer.calls.clone();
    let mut shell = Shell::new(summarizer, Language::English);

    let pending = shell
        .submit("Schwannomatosis is a rare genetic disorder...")
        .expect("non-empty text must issue a submission");
    assert_eq!(*shell.state(), ShellState::Loading);

    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);

    assert_eq!(*shell.state(), ShellState::Results(three_records()));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1, "exactly one remote call per submission");
    assert_eq!(
        calls[0].text(),
        "Schwannomatosis is a rare genetic disorder..."
    );
    assert_eq!(calls[0].language(), Language::English);
}

#[tokio::test]
async fn test_failure_goes_loading_then_error() {
    let summarizer = MockSummarizer::failing(|| SummarizeError::EmptyResponse);
    let mut shell = Shell::new(summarizer, Language::English);

    let pending = shell.submit("some text").unwrap();
    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);

    assert_eq!(
        *shell.state(),
        ShellState::Error(
            "The API did not return a summary. The content might be empty or invalid."
                .to_string()
        )
    );
}

#[tokio::test]
async fn test_resubmit_clears_prior_error_and_results() {
    let summarizer = MockSummarizer::new(three_records());
    let mut shell = Shell::new(summarizer, Language::English);

    // Reach Results, then check a new submit resets to Loading.
    let pending = shell.submit("first text").unwrap();
    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);
    assert!(matches!(shell.state(), ShellState::Results(_)));

    let pending = shell.submit("second text").unwrap();
    assert_eq!(*shell.state(), ShellState::Loading);
    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);
    assert!(matches!(shell.state(), ShellState::Results(_)));
}

// ─── Empty-input validation ──────────────────────────────────────────────────

#[test]
fn test_empty_submit_never_reaches_the_client() {
    let summarizer = MockSummarizer::new(three_records());
    let calls = summarizer.calls.clone();
    let mut shell = Shell::new(summarizer, Language::English);

    assert!(shell.submit("").is_none());
    assert!(shell.submit("   \n\t  ").is_none());

    assert_eq!(shell.notice(), Some(EMPTY_INPUT_NOTICE));
    assert_eq!(*shell.state(), ShellState::Idle);
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_submit_keeps_prior_results() {
    let summarizer = MockSummarizer::new(three_records());
    let mut shell = Shell::new(summarizer, Language::English);

    let pending = shell.submit("some text").unwrap();
    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);
    let settled = shell.state().clone();

    assert!(shell.submit("   ").is_none());
    assert_eq!(*shell.state(), settled, "prior results stay visible");
    assert_eq!(shell.notice(), Some(EMPTY_INPUT_NOTICE));

    // The notice clears on the next valid submission.
    let pending = shell.submit("more text").unwrap();
    assert!(shell.notice().is_none());
    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);
}

// ─── Error rewrites ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_credential_shows_setup_guidance() {
    let summarizer = MockSummarizer::failing(|| SummarizeError::MissingApiKey);
    let mut shell = Shell::new(summarizer, Language::English);

    let pending = shell.submit("some text").unwrap();
    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);

    let ShellState::Error(message) = shell.state() else {
        panic!("expected the error display mode, got {:?}", shell.state());
    };
    assert!(message.contains("GEMINI_API_KEY"));
    assert!(message.contains("is not configured"));
}

#[tokio::test]
async fn test_rejected_credential_shows_configuration_guidance() {
    let summarizer = MockSummarizer::failing(|| SummarizeError::InvalidApiKey);
    let mut shell = Shell::new(summarizer, Language::English);

    let pending = shell.submit("some text").unwrap();
    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);

    assert_eq!(
        *shell.state(),
        ShellState::Error(
            "The provided API key is invalid. Please check your configuration.".to_string()
        )
    );
}

// ─── Cancellation and late results ───────────────────────────────────────────

#[test]
fn test_superseding_submit_discards_the_earlier_outcome() {
    let summarizer = MockSummarizer::new(three_records());
    let mut shell = Shell::new(summarizer, Language::English);

    let first = shell.submit("first text").unwrap();
    let second = shell.submit("second text").unwrap();
    assert!(first.token().is_cancelled());
    assert!(!second.token().is_cancelled());

    // Even a successful late outcome from the superseded submission must
    // not be applied.
    shell.settle(first, Ok(vec![record("Stale.", 10); 3]));
    assert_eq!(*shell.state(), ShellState::Loading);

    shell.settle(second, Ok(three_records()));
    assert_eq!(*shell.state(), ShellState::Results(three_records()));
}

#[test]
fn test_shutdown_discards_an_in_flight_outcome() {
    let summarizer = MockSummarizer::new(three_records());
    let mut shell = Shell::new(summarizer, Language::English);

    let pending = shell.submit("some text").unwrap();
    shell.shutdown();
    assert!(pending.token().is_cancelled());

    shell.settle(pending, Ok(three_records()));
    assert_eq!(*shell.state(), ShellState::Loading, "late result discarded");
}

#[tokio::test]
async fn test_cancelled_outcome_is_not_shown_as_an_error() {
    let summarizer = MockSummarizer::failing(|| SummarizeError::Cancelled);
    let mut shell = Shell::new(summarizer, Language::English);

    let pending = shell.submit("some text").unwrap();
    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);

    assert!(!matches!(shell.state(), ShellState::Error(_)));
}

// ─── Scenario ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_schwannomatosis_scenario_renders_three_high_tier_capable_cards() {
    let summarizer = MockSummarizer::new(three_records());
    let mut shell = Shell::new(summarizer, Language::English);

    let pending = shell
        .submit("Schwannomatosis is a rare genetic disorder...")
        .unwrap();
    assert_eq!(*shell.state(), ShellState::Loading);

    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);

    let ShellState::Results(records) = shell.state() else {
        panic!("expected results, got {:?}", shell.state());
    };
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].citation_worthiness_score, 85);
    assert_eq!(records[0].score_tier(), ScoreTier::High);
}

#[tokio::test]
async fn test_language_switch_applies_to_the_next_submission() {
    let summarizer = MockSummarizer::new(three_records());
    let calls = summarizer.calls.clone();
    let mut shell = Shell::new(summarizer, Language::English);

    shell.set_language(Language::Serbian);
    let pending = shell.submit("neki tekst").unwrap();
    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);

    assert_eq!(calls.lock().unwrap()[0].language(), Language::Serbian);
}
