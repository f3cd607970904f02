use crate::core::models::{HIGH_SCORE_THRESHOLD, LOW_SCORE_THRESHOLD, Language};

/// Number of summaries the model is instructed to return. The decoder
/// rejects responses with any other count.
pub const SUMMARY_COUNT: usize = 3;

/// Word ceiling demanded per summary. Semantically bounded only; the
/// system does not count words itself.
pub const MAX_SUMMARY_WORDS: usize = 100;

/// Builds the summarization instruction sent to the model.
///
/// The prompt demands a bare JSON object with a "summaries" array of
/// exactly [`SUMMARY_COUNT`] objects, localized into `language`. The user
/// text is embedded verbatim between `---` delimiters.
#[must_use]
pub fn build_summary_prompt(text: &str, language: Language) -> String {
    format!(
        r#"Your task is to provide a detailed summary of the following text.

Analyze the text and provide a response in {language} formatted as a single JSON object. This object must contain one key: "summaries". The value for "summaries" must be an array of exactly {SUMMARY_COUNT} distinct summary objects.

Each summary object in the array must have the following structure:
{{
  "subjectExplanation": "Identify the main subject of the text (e.g., a person, concept, or event). Then, provide a single, concise sentence that defines or describes this subject. For example, if the text is about 'Schwannomatosis', start with 'Schwannomatosis is...'. Do NOT start with 'This text is about...'.",
  "detailedSummary": "A detailed summary of the text's content, with a strict maximum of {MAX_SUMMARY_WORDS} words. This summary should be written in a direct, encyclopedic style. Explain the key points as facts about the subject. Do NOT use phrases like 'The text states that...' or 'According to the text...'. Each of the {SUMMARY_COUNT} summaries should offer a slightly different perspective or focus on different key points from the text.",
  "citationWorthinessScore": "An integer score from 0 to 100 representing the summary's quality for citation. A high score ({HIGH_SCORE_THRESHOLD}+) means it is fact-dense, neutral, and encyclopedic. A low score (< {LOW_SCORE_THRESHOLD}) indicates it is vague, contains conversational phrases, or is poorly structured.",
  "scoreJustification": "A brief, one-sentence explanation for the assigned score."
}}

The final output must be only the valid JSON object. Do not include any other text or markdown formatting (like ```json).

Here is the text to summarize:
---
{text}
---
"#,
        language = language.as_str(),
    )
}
