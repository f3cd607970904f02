//! Decoding of the model's raw text into summary records.
//!
//! The model is instructed to return bare JSON but is not guaranteed to
//! obey, so the raw text is first unwrapped from markdown code fences if
//! present, then decoded strictly: field presence, field types, and the
//! score range are all checked, and every failure names the offending
//! path.

use serde_json::{Map, Value};

use crate::core::models::SummaryRecord;
use crate::errors::SummarizeError;
use crate::prompt::SUMMARY_COUNT;

/// Strips a leading markdown code fence (with optional language tag, e.g.
/// ````` ```json `````) and a trailing fence if present. Unfenced text is
/// returned trimmed and otherwise untouched.
#[must_use]
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the rest of the fence line (the info string, e.g. "json").
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}

/// Decodes raw model output into exactly [`SUMMARY_COUNT`] records.
///
/// # Errors
///
/// Returns `SummarizeError::MalformedResponse` when the text is not valid
/// JSON, the top-level "summaries" array is missing, the count is wrong,
/// or any record has a missing, mistyped, or out-of-range field.
pub fn parse_summaries(raw: &str) -> Result<Vec<SummaryRecord>, SummarizeError> {
    let clean = strip_code_fences(raw);

    let document: Value = serde_json::from_str(clean).map_err(|e| {
        SummarizeError::MalformedResponse(format!("The API response was not valid JSON: {e}"))
    })?;

    let Some(items) = document.get("summaries").and_then(Value::as_array) else {
        return Err(SummarizeError::MalformedResponse(
            "The API response did not contain the expected 'summaries' array.".to_string(),
        ));
    };

    if items.len() != SUMMARY_COUNT {
        return Err(SummarizeError::MalformedResponse(format!(
            "Expected exactly {SUMMARY_COUNT} summaries, got {}.",
            items.len()
        )));
    }

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| decode_record(idx, item))
        .collect()
}

fn decode_record(idx: usize, item: &Value) -> Result<SummaryRecord, SummarizeError> {
    let path = format!("summaries[{idx}]");
    let Some(fields) = item.as_object() else {
        return Err(SummarizeError::malformed_field(
            &path,
            &format!("expected a JSON object, got {}", json_type(item)),
        ));
    };

    Ok(SummaryRecord {
        subject_explanation: string_field(fields, &path, "subjectExplanation")?,
        detailed_summary: string_field(fields, &path, "detailedSummary")?,
        citation_worthiness_score: score_field(fields, &path, "citationWorthinessScore")?,
        score_justification: string_field(fields, &path, "scoreJustification")?,
    })
}

fn string_field(
    fields: &Map<String, Value>,
    path: &str,
    name: &str,
) -> Result<String, SummarizeError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(SummarizeError::malformed_field(
            &format!("{path}.{name}"),
            &format!("expected a string, got {}", json_type(other)),
        )),
        None => Err(SummarizeError::malformed_field(
            &format!("{path}.{name}"),
            "missing required field",
        )),
    }
}

fn score_field(fields: &Map<String, Value>, path: &str, name: &str) -> Result<u8, SummarizeError> {
    match fields.get(name) {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(score) if score <= 100 => Ok(score as u8),
            _ => Err(SummarizeError::malformed_field(
                &format!("{path}.{name}"),
                &format!("expected an integer in 0..=100, got {n}"),
            )),
        },
        Some(other) => Err(SummarizeError::malformed_field(
            &format!("{path}.{name}"),
            &format!("expected an integer in 0..=100, got {}", json_type(other)),
        )),
        None => Err(SummarizeError::malformed_field(
            &format!("{path}.{name}"),
            "missing required field",
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
