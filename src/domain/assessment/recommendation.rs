//! Recommendation results and their provenance.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Confidence, Solution};

/// The classifier's verdict: one solution and how decisively it won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub solution: Solution,
    pub confidence: Confidence,
}

impl RecommendationResult {
    pub fn new(solution: Solution, confidence: Confidence) -> Self {
        Self {
            solution,
            confidence,
        }
    }
}

/// Which path produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// Remote recommendation endpoint.
    Remote,
    /// Language model prompted directly.
    Llm,
    /// Local keyword classifier, used by choice.
    Local,
    /// Local keyword classifier, substituted after the preferred engine failed.
    LocalFallback,
}

impl RecommendationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationSource::Remote => "remote",
            RecommendationSource::Llm => "llm",
            RecommendationSource::Local => "local",
            RecommendationSource::LocalFallback => "local_fallback",
        }
    }

    /// True when the local classifier answered.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            RecommendationSource::Local | RecommendationSource::LocalFallback
        )
    }
}

impl fmt::Display for RecommendationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A result together with the source that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub result: RecommendationResult,
    pub source: RecommendationSource,
}

impl Recommendation {
    pub fn new(result: RecommendationResult, source: RecommendationSource) -> Self {
        Self { result, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_to_wire_shape() {
        let result = RecommendationResult::new(Solution::Meditation, Confidence::new(80));
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["solution"], "Meditation");
        assert_eq!(json["confidence"], 80);
    }

    #[test]
    fn result_deserializes_from_wire_shape() {
        let result: RecommendationResult =
            serde_json::from_str(r#"{"solution":"Talk to a Friend","confidence":75}"#).unwrap();

        assert_eq!(result.solution, Solution::TalkToAFriend);
        assert_eq!(result.confidence.value(), 75);
    }

    #[test]
    fn recommendation_flattens_result() {
        let recommendation = Recommendation::new(
            RecommendationResult::new(Solution::ConsultATherapist, Confidence::new(90)),
            RecommendationSource::LocalFallback,
        );
        let json = serde_json::to_value(recommendation).unwrap();

        assert_eq!(json["solution"], "Consult a Therapist");
        assert_eq!(json["confidence"], 90);
        assert_eq!(json["source"], "local_fallback");
    }

    #[test]
    fn local_sources_are_flagged() {
        assert!(RecommendationSource::Local.is_local());
        assert!(RecommendationSource::LocalFallback.is_local());
        assert!(!RecommendationSource::Remote.is_local());
        assert!(!RecommendationSource::Llm.is_local());
    }
}
