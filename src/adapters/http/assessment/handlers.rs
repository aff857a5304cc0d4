//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::recommendation::FallbackRecommendationEngine;
use crate::application::handlers::assessment::{
    GetQuestionnaireHandler, SubmitAssessmentCommand, SubmitAssessmentHandler,
};
use crate::domain::assessment::{AnswerRecord, AssessmentError};

use super::dto::{ErrorResponse, HealthResponse, QuestionnaireResponse, RecommendationResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state.
///
/// Cloned for each request; the engine is shared through an `Arc`.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub engine: Arc<FallbackRecommendationEngine>,
}

impl AssessmentAppState {
    pub fn new(engine: Arc<FallbackRecommendationEngine>) -> Self {
        Self { engine }
    }

    pub fn submit_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(self.engine.clone())
    }

    pub fn questionnaire_handler(&self) -> GetQuestionnaireHandler {
        GetQuestionnaireHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/recommendation - Assess answers and recommend a solution
pub async fn submit_recommendation(
    State(state): State<AssessmentAppState>,
    body: Result<Json<AnswerRecord>, JsonRejection>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let Json(answers) = body?;

    let outcome = state
        .submit_handler()
        .handle(SubmitAssessmentCommand { answers })
        .await?;

    Ok((StatusCode::OK, Json(RecommendationResponse::from(outcome))))
}

/// GET /api/questions - List the questionnaire
pub async fn get_questions(State(state): State<AssessmentAppState>) -> impl IntoResponse {
    let questions = state.questionnaire_handler().handle();
    Json(QuestionnaireResponse { questions })
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for assessment endpoints.
#[derive(Debug)]
pub enum AssessmentApiError {
    /// Answers failed validation.
    Assessment(AssessmentError),
    /// Body was not a JSON answer record.
    InvalidBody(String),
}

impl From<AssessmentError> for AssessmentApiError {
    fn from(err: AssessmentError) -> Self {
        Self::Assessment(err)
    }
}

impl From<JsonRejection> for AssessmentApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let body = match &self {
            AssessmentApiError::Assessment(err) => {
                tracing::debug!(field = err.field(), "Rejected assessment");
                ErrorResponse::validation(err.field(), err.message())
            }
            AssessmentApiError::InvalidBody(message) => {
                tracing::debug!(error = %message, "Rejected request body");
                ErrorResponse::bad_request(message.clone())
            }
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
