//! HTTP Recommendation Engine - Calls a remote recommendation endpoint.
//!
//! The endpoint receives the answer record as camelCase JSON and replies with
//! `{"solution": "...", "confidence": N}`. One attempt per call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::payload;
use crate::domain::assessment::{AnswerRecord, RecommendationResult, RecommendationSource};
use crate::ports::{EngineInfo, RecommendationEngine, RecommendationError};

/// Configuration for the remote endpoint.
#[derive(Debug, Clone)]
pub struct HttpEngineConfig {
    /// Full URL of the recommendation endpoint.
    pub endpoint: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl HttpEngineConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Remote engine speaking JSON over HTTP.
pub struct HttpRecommendationEngine {
    config: HttpEngineConfig,
    client: Client,
}

impl HttpRecommendationEngine {
    pub fn new(config: HttpEngineConfig) -> Result<Self, RecommendationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                RecommendationError::unavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    async fn send_request(&self, answers: &AnswerRecord) -> Result<Response, RecommendationError> {
        self.client
            .post(&self.config.endpoint)
            .json(answers)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RecommendationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    RecommendationError::network(format!("Connection failed: {}", e))
                } else {
                    RecommendationError::network(e.to_string())
                }
            })
    }
}

#[async_trait]
impl RecommendationEngine for HttpRecommendationEngine {
    async fn recommend(
        &self,
        answers: &AnswerRecord,
    ) -> Result<RecommendationResult, RecommendationError> {
        let response = self.send_request(answers).await?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                RecommendationError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else {
                RecommendationError::network(format!("Failed to read body: {}", e))
            }
        })?;

        if !status.is_success() {
            return Err(RecommendationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result = payload::from_json_str(&body)?;
        tracing::debug!(
            endpoint = %self.config.endpoint,
            solution = %result.solution,
            confidence = result.confidence.value(),
            "Remote recommendation received"
        );
        Ok(result)
    }

    fn engine_info(&self) -> EngineInfo {
        EngineInfo::new("remote-http", RecommendationSource::Remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_ten_second_timeout() {
        let config = HttpEngineConfig::new("http://localhost:9/api/recommendation");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn config_timeout_can_be_overridden() {
        let config = HttpEngineConfig::new("http://x").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout.as_secs(), 3);
    }

    #[test]
    fn engine_reports_remote_source() {
        let engine = HttpRecommendationEngine::new(HttpEngineConfig::new("http://x")).unwrap();
        assert_eq!(engine.engine_info().source, RecommendationSource::Remote);
        assert_eq!(engine.endpoint(), "http://x");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        // Port 9 (discard) is closed on loopback in test environments.
        let engine = HttpRecommendationEngine::new(
            HttpEngineConfig::new("http://127.0.0.1:9/api/recommendation")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let err = engine.recommend(&AnswerRecord::default()).await.unwrap_err();
        assert!(matches!(
            err,
            RecommendationError::Network(_) | RecommendationError::Timeout { .. }
        ));
    }
}
