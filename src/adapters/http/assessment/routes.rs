//! Axum router configuration for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_questions, health, submit_recommendation, AssessmentAppState};

/// Create the assessment API router.
///
/// # Routes
/// - `POST /recommendation` - Assess answers and recommend a solution
/// - `GET /questions` - List the questionnaire
pub fn assessment_routes() -> Router<AssessmentAppState> {
    Router::new()
        .route("/recommendation", post(submit_recommendation))
        .route("/questions", get(get_questions))
}

/// Create the complete assessment module router.
///
/// Mounts the API under `/api` and adds `GET /health`.
///
/// # Example
///
/// ```ignore
/// let state = AssessmentAppState::new(Arc::new(FallbackRecommendationEngine::local_only()));
/// let app = assessment_router(state);
/// ```
pub fn assessment_router(state: AssessmentAppState) -> Router {
    Router::new()
        .nest("/api", assessment_routes())
        .route("/health", get(health))
        .with_state(state)
}
