//! Assessment module - the wellness questionnaire and its local classifier.
//!
//! # Components
//!
//! - `AnswerRecord` / `AnswerField` - The ten free-text answers and their questions
//! - `Solution` - The three guidance outcomes with their guidance text
//! - `Confidence` - Bounded confidence value (65-95)
//! - `keywords` - Static keyword and bonus tables
//! - `KeywordClassifier` - Pure scoring pass producing a `RecommendationResult`
//! - `AssessmentError` - Input validation failures

mod answers;
mod classifier;
mod confidence;
mod errors;
pub mod keywords;
mod recommendation;
mod solution;

pub use answers::{AnswerField, AnswerRecord};
pub use classifier::{classify, KeywordClassifier, ScoreTriple, BASE_CONFIDENCE};
pub use confidence::Confidence;
pub use errors::AssessmentError;
pub use keywords::Category;
pub use recommendation::{Recommendation, RecommendationResult, RecommendationSource};
pub use solution::{Solution, SolutionGuidance};
