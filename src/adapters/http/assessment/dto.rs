//! Request/response DTOs for assessment endpoints.

use serde::Serialize;

use crate::application::handlers::assessment::{AssessmentOutcome, QuestionView};
use crate::domain::assessment::{RecommendationSource, Solution, SolutionGuidance};

/// Body of a successful `POST /api/recommendation`.
///
/// `solution` and `confidence` follow the remote engine contract so this
/// service can itself act as a remote engine.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub solution: Solution,
    pub confidence: u8,
    pub source: RecommendationSource,
    pub guidance: GuidanceResponse,
}

impl From<AssessmentOutcome> for RecommendationResponse {
    fn from(outcome: AssessmentOutcome) -> Self {
        Self {
            solution: outcome.solution,
            confidence: outcome.confidence.value(),
            source: outcome.source,
            guidance: outcome.guidance.into(),
        }
    }
}

/// Description and tips shown with a recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct GuidanceResponse {
    pub description: String,
    pub tips: Vec<String>,
}

impl From<SolutionGuidance> for GuidanceResponse {
    fn from(guidance: SolutionGuidance) -> Self {
        Self {
            description: guidance.description.to_string(),
            tips: guidance.tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Body of `GET /api/questions`.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub questions: Vec<QuestionView>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    /// Validation failure naming the offending field.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Confidence;

    #[test]
    fn recommendation_response_serializes_contract_fields() {
        let outcome = AssessmentOutcome {
            solution: Solution::Meditation,
            confidence: Confidence::new(80),
            source: RecommendationSource::LocalFallback,
            guidance: Solution::Meditation.guidance(),
        };

        let json = serde_json::to_value(RecommendationResponse::from(outcome)).unwrap();

        assert_eq!(json["solution"], "Meditation");
        assert_eq!(json["confidence"], 80);
        assert_eq!(json["source"], "local_fallback");
        assert_eq!(json["guidance"]["tips"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::bad_request("nope")).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn validation_error_carries_field() {
        let error = ErrorResponse::validation("goals", "Field 'goals' cannot be empty");
        assert_eq!(error.code, "VALIDATION_FAILED");
        assert_eq!(error.details.unwrap()["field"], "goals");
    }
}
