//! Assessment command and query handlers.

mod get_questionnaire;
mod submit_assessment;

pub use get_questionnaire::{GetQuestionnaireHandler, QuestionView};
pub use submit_assessment::{AssessmentOutcome, SubmitAssessmentCommand, SubmitAssessmentHandler};
