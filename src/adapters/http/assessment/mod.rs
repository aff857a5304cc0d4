//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, GuidanceResponse, HealthResponse, QuestionnaireResponse,
    RecommendationResponse,
};
pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::{assessment_router, assessment_routes};
