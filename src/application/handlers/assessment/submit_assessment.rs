//! SubmitAssessmentHandler - Command handler turning answers into guidance.

use std::sync::Arc;

use serde::Serialize;

use crate::adapters::recommendation::FallbackRecommendationEngine;
use crate::domain::assessment::{
    AnswerRecord, AssessmentError, Confidence, RecommendationSource, Solution, SolutionGuidance,
};

/// Command to assess a completed questionnaire.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub answers: AnswerRecord,
}

/// Result of a successful assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentOutcome {
    pub solution: Solution,
    pub confidence: Confidence,
    pub source: RecommendationSource,
    pub guidance: SolutionGuidance,
}

/// Handler for assessment submissions.
pub struct SubmitAssessmentHandler {
    engine: Arc<FallbackRecommendationEngine>,
}

impl SubmitAssessmentHandler {
    pub fn new(engine: Arc<FallbackRecommendationEngine>) -> Self {
        Self { engine }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<AssessmentOutcome, AssessmentError> {
        // 1. Every answer must hold text
        cmd.answers.validate()?;

        // 2. Recommend (never fails)
        let recommendation = self.engine.recommend(&cmd.answers).await;

        tracing::info!(
            solution = %recommendation.result.solution,
            confidence = recommendation.result.confidence.value(),
            source = %recommendation.source,
            "Assessment completed"
        );

        // 3. Attach guidance for the chosen solution
        let solution = recommendation.result.solution;
        Ok(AssessmentOutcome {
            solution,
            confidence: recommendation.result.confidence,
            source: recommendation.source,
            guidance: solution.guidance(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AnswerField;

    fn complete_answers() -> AnswerRecord {
        AnswerRecord::default()
            .with(AnswerField::Name, "Alex")
            .with(AnswerField::Problem, "constant fighting with my partner")
            .with(AnswerField::Cause, "we never talk about money")
            .with(AnswerField::Involved, "my partner")
            .with(AnswerField::Emotion, "frustrated")
            .with(AnswerField::Severity, "5")
            .with(AnswerField::Duration, "a few weeks")
            .with(AnswerField::Impact, "hard to focus at home")
            .with(AnswerField::PreviousHelp, "nothing yet")
            .with(AnswerField::Goals, "get along better")
    }

    fn handler() -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(Arc::new(FallbackRecommendationEngine::local_only()))
    }

    #[tokio::test]
    async fn complete_answers_produce_outcome_with_guidance() {
        let outcome = handler()
            .handle(SubmitAssessmentCommand {
                answers: complete_answers(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.solution, Solution::TalkToAFriend);
        assert_eq!(outcome.source, RecommendationSource::Local);
        assert_eq!(outcome.guidance, Solution::TalkToAFriend.guidance());
    }

    #[tokio::test]
    async fn blank_answer_is_rejected() {
        let answers = complete_answers().with(AnswerField::Duration, "   ");

        let err = handler()
            .handle(SubmitAssessmentCommand { answers })
            .await
            .unwrap_err();

        assert_eq!(err.field(), "duration");
    }

    #[tokio::test]
    async fn first_blank_field_is_reported() {
        let answers = complete_answers()
            .with(AnswerField::Goals, "")
            .with(AnswerField::Cause, "");

        let err = handler()
            .handle(SubmitAssessmentCommand { answers })
            .await
            .unwrap_err();

        assert_eq!(err.field(), "cause");
    }
}
