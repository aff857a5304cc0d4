//! Recommendation Engine Port - Interface for anything that can turn answers
//! into a recommendation.
//!
//! The local keyword classifier, the remote recommendation endpoint and the
//! language-model prompt all implement this port. The fallback orchestrator
//! composes them without knowing which one it holds.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedEngine;
//!
//! #[async_trait]
//! impl RecommendationEngine for FixedEngine {
//!     async fn recommend(
//!         &self,
//!         _answers: &AnswerRecord,
//!     ) -> Result<RecommendationResult, RecommendationError> {
//!         Ok(RecommendationResult::new(Solution::Meditation, Confidence::MIN))
//!     }
//!
//!     fn engine_info(&self) -> EngineInfo {
//!         EngineInfo::new("fixed", RecommendationSource::Local)
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::assessment::{AnswerRecord, RecommendationResult, RecommendationSource};
use crate::ports::AIError;

/// Port for producing a recommendation from a set of answers.
#[async_trait]
pub trait RecommendationEngine: Send + Sync {
    /// Produces a recommendation for the given answers.
    ///
    /// Implementations make a single attempt. Retrying is not their concern.
    async fn recommend(
        &self,
        answers: &AnswerRecord,
    ) -> Result<RecommendationResult, RecommendationError>;

    /// Describes the engine for logs and events.
    fn engine_info(&self) -> EngineInfo;
}

/// Engine name and the source tag its results carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineInfo {
    pub name: String,
    pub source: RecommendationSource,
}

impl EngineInfo {
    pub fn new(name: impl Into<String>, source: RecommendationSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}

/// Recommendation engine errors.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    /// Engine is not reachable or not configured.
    #[error("recommendation service unavailable: {0}")]
    Unavailable(String),

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Service answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Response could not be understood as a recommendation.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Underlying language model provider failed.
    #[error("AI provider error: {0}")]
    Provider(#[from] AIError),
}

impl RecommendationError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Short machine-readable kind, used in logs and fallback events.
    pub fn kind(&self) -> &'static str {
        match self {
            RecommendationError::Unavailable(_) => "unavailable",
            RecommendationError::Network(_) => "network",
            RecommendationError::Timeout { .. } => "timeout",
            RecommendationError::Status { .. } => "status",
            RecommendationError::MalformedResponse(_) => "malformed_response",
            RecommendationError::Provider(_) => "provider",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_displays_correctly() {
        let err = RecommendationError::Status {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 503: down");

        let err = RecommendationError::Timeout { timeout_secs: 10 };
        assert_eq!(err.to_string(), "request timed out after 10s");

        let err = RecommendationError::malformed("missing solution");
        assert_eq!(err.to_string(), "malformed response: missing solution");
    }

    #[test]
    fn provider_errors_convert() {
        let err: RecommendationError = AIError::AuthenticationFailed.into();
        assert!(matches!(err, RecommendationError::Provider(AIError::AuthenticationFailed)));
        assert_eq!(err.kind(), "provider");
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            RecommendationError::unavailable("x").kind(),
            RecommendationError::network("x").kind(),
            RecommendationError::Timeout { timeout_secs: 1 }.kind(),
            RecommendationError::Status {
                status: 500,
                body: String::new(),
            }
            .kind(),
            RecommendationError::malformed("x").kind(),
        ];
        let mut unique = kinds.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), kinds.len());
    }

    #[test]
    fn engine_info_carries_source() {
        let info = EngineInfo::new("remote-http", RecommendationSource::Remote);
        assert_eq!(info.name, "remote-http");
        assert_eq!(info.source, RecommendationSource::Remote);
    }
}
