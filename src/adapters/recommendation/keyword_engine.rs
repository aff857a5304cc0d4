//! Keyword Engine - the local classifier exposed through the engine port.

use async_trait::async_trait;

use crate::domain::assessment::{
    AnswerRecord, KeywordClassifier, RecommendationResult, RecommendationSource,
};
use crate::ports::{EngineInfo, RecommendationEngine, RecommendationError};

/// Local rule-based engine. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRecommendationEngine;

impl KeywordRecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classifies synchronously. The port method delegates here.
    pub fn classify(&self, answers: &AnswerRecord) -> RecommendationResult {
        let scores = KeywordClassifier::score(answers);
        let result = scores.to_result();

        tracing::debug!(
            therapy = scores.therapy,
            friend = scores.friend,
            meditation = scores.meditation,
            solution = %result.solution,
            confidence = result.confidence.value(),
            "Keyword classification complete"
        );

        result
    }
}

#[async_trait]
impl RecommendationEngine for KeywordRecommendationEngine {
    async fn recommend(
        &self,
        answers: &AnswerRecord,
    ) -> Result<RecommendationResult, RecommendationError> {
        Ok(self.classify(answers))
    }

    fn engine_info(&self) -> EngineInfo {
        EngineInfo::new("keyword", RecommendationSource::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{classify, AnswerField, Solution};

    #[tokio::test]
    async fn engine_matches_classifier() {
        let answers = AnswerRecord::default().with(AnswerField::Problem, "family argument");
        let engine = KeywordRecommendationEngine::new();

        let result = engine.recommend(&answers).await.unwrap();

        assert_eq!(result, classify(&answers));
        assert_eq!(result.solution, Solution::TalkToAFriend);
    }

    #[test]
    fn engine_reports_local_source() {
        let info = KeywordRecommendationEngine::new().engine_info();
        assert_eq!(info.source, RecommendationSource::Local);
    }
}
