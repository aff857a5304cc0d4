//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AssessmentOutcome, GetQuestionnaireHandler, QuestionView, SubmitAssessmentCommand,
    SubmitAssessmentHandler,
};
