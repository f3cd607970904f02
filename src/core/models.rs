use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Scores at or above this read as fact-dense and citation-worthy.
pub const HIGH_SCORE_THRESHOLD: u8 = 80;
/// Scores below this read as vague or conversational.
pub const LOW_SCORE_THRESHOLD: u8 = 50;

/// One generated summary, produced only by decoding a model response.
///
/// Field names follow the JSON schema the prompt demands from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub subject_explanation: String,
    pub detailed_summary: String,
    pub citation_worthiness_score: u8,
    pub score_justification: String,
}

impl SummaryRecord {
    #[must_use]
    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::for_score(self.citation_worthiness_score)
    }
}

/// Output language for the generated summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    English,
    Serbian,
}

impl Language {
    /// The English name of the language, as interpolated into the prompt.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Serbian => "Serbian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission to the Summarization Client. The text is guaranteed
/// non-empty after trimming; construction fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationRequest {
    text: String,
    language: Language,
}

impl SummarizationRequest {
    pub fn new(text: impl Into<String>, language: Language) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self { text, language })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }
}

/// Presentation tier of a citation-worthiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    #[must_use]
    pub fn for_score(score: u8) -> Self {
        if score >= HIGH_SCORE_THRESHOLD {
            ScoreTier::High
        } else if score >= LOW_SCORE_THRESHOLD {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::High => "High",
            ScoreTier::Medium => "Medium",
            ScoreTier::Low => "Low",
        }
    }
}
