//! Parsing of `{solution, confidence}` payloads returned by remote engines.
//!
//! The remote endpoint and the language model are both untrusted. Anything
//! that does not name one of the three solutions with a confidence between
//! 0 and 100 is rejected as malformed so the caller can fall back.

use serde_json::Value;

use crate::domain::assessment::{Confidence, RecommendationResult, Solution};
use crate::domain::foundation::ValidationError;
use crate::ports::RecommendationError;

/// Parses a JSON document holding a recommendation.
pub fn from_json_str(body: &str) -> Result<RecommendationResult, RecommendationError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| RecommendationError::malformed(format!("invalid JSON: {}", e)))?;
    from_value(&value)
}

/// Parses model output, tolerating a markdown code fence around the JSON.
pub fn from_model_output(text: &str) -> Result<RecommendationResult, RecommendationError> {
    from_json_str(strip_code_fence(text))
}

/// Validates a decoded JSON value as a recommendation.
pub fn from_value(value: &Value) -> Result<RecommendationResult, RecommendationError> {
    let object = value
        .as_object()
        .ok_or_else(|| RecommendationError::malformed("expected a JSON object"))?;

    let label = object
        .get("solution")
        .and_then(Value::as_str)
        .ok_or_else(|| RecommendationError::malformed("missing string field 'solution'"))?;
    let solution: Solution = label
        .parse()
        .map_err(|e: ValidationError| RecommendationError::malformed(e.to_string()))?;

    let raw = object
        .get("confidence")
        .and_then(Value::as_f64)
        .ok_or_else(|| RecommendationError::malformed("missing numeric field 'confidence'"))?;
    if !raw.is_finite() || !(0.0..=100.0).contains(&raw) {
        return Err(RecommendationError::malformed(format!(
            "confidence {} outside 0-100",
            raw
        )));
    }

    Ok(RecommendationResult::new(
        solution,
        Confidence::new(raw.round() as u32),
    ))
}

/// Removes a surrounding ```` ``` ```` or ```` ```json ```` fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
