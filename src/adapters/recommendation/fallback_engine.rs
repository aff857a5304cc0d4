//! Fallback Recommendation Engine - Prefers a remote engine, answers locally
//! when it cannot.
//!
//! Any error from the preferred engine (network, timeout, bad status,
//! malformed reply, model failure) is logged, reported to the event
//! callback, and replaced by the keyword classifier's answer. Callers always
//! get a recommendation. An optional deadline caps the preferred attempt;
//! running past it counts as a timeout.
//!
//! # Example
//!
//! ```ignore
//! let remote = HttpRecommendationEngine::new(HttpEngineConfig::new(url))?;
//!
//! let engine = FallbackRecommendationEngine::local_only()
//!     .with_preferred(Arc::new(remote));
//!
//! let recommendation = engine.recommend(&answers).await;
//! ```

use std::sync::Arc;
use std::time::Duration;

use super::KeywordRecommendationEngine;
use crate::domain::assessment::{AnswerRecord, Recommendation, RecommendationSource};
use crate::ports::{EngineInfo, RecommendationEngine, RecommendationError};

/// Recommendation events for fallback monitoring.
pub mod events {
    use serde::{Deserialize, Serialize};

    use crate::domain::foundation::{EventId, Timestamp};

    /// Emitted when the preferred engine failed and the local classifier answered.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct RecommendationFellBack {
        pub event_id: EventId,
        /// Name of the engine that failed.
        pub preferred_engine: String,
        /// Short machine-readable error kind.
        pub error_kind: String,
        /// Human-readable error message.
        pub reason: String,
        pub occurred_at: Timestamp,
    }

    impl RecommendationFellBack {
        pub fn new(
            preferred_engine: impl Into<String>,
            error_kind: impl Into<String>,
            reason: impl Into<String>,
        ) -> Self {
            Self {
                event_id: EventId::new(),
                preferred_engine: preferred_engine.into(),
                error_kind: error_kind.into(),
                reason: reason.into(),
                occurred_at: Timestamp::now(),
            }
        }

        /// Stable event type name.
        pub fn event_type(&self) -> &'static str {
            "recommendation.fell_back"
        }
    }
}

/// Callback for receiving recommendation events.
pub trait RecommendationEventCallback: Send + Sync {
    /// Called when the local classifier replaced a failed preferred engine.
    fn on_fallback(&self, event: events::RecommendationFellBack);
}

/// No-op event callback for when event tracking isn't needed.
#[derive(Debug, Clone, Copy)]
pub struct NoOpEventCallback;

impl RecommendationEventCallback for NoOpEventCallback {
    fn on_fallback(&self, _event: events::RecommendationFellBack) {}
}

/// Remote-preferred, local-fallback recommendation orchestrator.
pub struct FallbackRecommendationEngine {
    preferred: Option<Arc<dyn RecommendationEngine>>,
    local: KeywordRecommendationEngine,
    event_callback: Arc<dyn RecommendationEventCallback>,
    deadline: Option<Duration>,
}

impl FallbackRecommendationEngine {
    /// Creates an orchestrator that only uses the keyword classifier.
    pub fn local_only() -> Self {
        Self {
            preferred: None,
            local: KeywordRecommendationEngine::new(),
            event_callback: Arc::new(NoOpEventCallback),
            deadline: None,
        }
    }

    /// Sets the engine to try before the local classifier.
    pub fn with_preferred(mut self, engine: Arc<dyn RecommendationEngine>) -> Self {
        self.preferred = Some(engine);
        self
    }

    /// Sets the event callback for fallback events.
    pub fn with_event_callback(mut self, callback: Arc<dyn RecommendationEventCallback>) -> Self {
        self.event_callback = callback;
        self
    }

    /// Caps how long the preferred engine may take.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Describes the preferred engine, if one is configured.
    pub fn preferred_info(&self) -> Option<EngineInfo> {
        self.preferred.as_ref().map(|engine| engine.engine_info())
    }

    /// Produces a recommendation. Never fails.
    pub async fn recommend(&self, answers: &AnswerRecord) -> Recommendation {
        let Some(preferred) = &self.preferred else {
            return Recommendation::new(self.local.classify(answers), RecommendationSource::Local);
        };

        let info = preferred.engine_info();
        let attempt = preferred.recommend(answers);
        let outcome = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, attempt)
                .await
                .unwrap_or(Err(RecommendationError::Timeout {
                    timeout_secs: deadline.as_secs(),
                })),
            None => attempt.await,
        };

        match outcome {
            Ok(result) => Recommendation::new(result, info.source),
            Err(err) => {
                tracing::warn!(
                    engine = %info.name,
                    error_kind = err.kind(),
                    error = %err,
                    "Preferred recommendation engine failed, using local classifier"
                );

                self.event_callback
                    .on_fallback(events::RecommendationFellBack::new(
                        info.name,
                        err.kind(),
                        err.to_string(),
                    ));

                Recommendation::new(
                    self.local.classify(answers),
                    RecommendationSource::LocalFallback,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::recommendation::LlmRecommendationEngine;
    use crate::domain::assessment::{
        classify, AnswerField, Confidence, RecommendationResult, Solution,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    struct FixedEngine(RecommendationResult);

    #[async_trait]
    impl RecommendationEngine for FixedEngine {
        async fn recommend(
            &self,
            _answers: &AnswerRecord,
        ) -> Result<RecommendationResult, RecommendationError> {
            Ok(self.0)
        }

        fn engine_info(&self) -> EngineInfo {
            EngineInfo::new("fixed", RecommendationSource::Remote)
        }
    }

    struct FailingEngine(fn() -> RecommendationError);

    #[async_trait]
    impl RecommendationEngine for FailingEngine {
        async fn recommend(
            &self,
            _answers: &AnswerRecord,
        ) -> Result<RecommendationResult, RecommendationError> {
            Err((self.0)())
        }

        fn engine_info(&self) -> EngineInfo {
            EngineInfo::new("failing", RecommendationSource::Llm)
        }
    }

    #[derive(Default)]
    struct RecordingCallback {
        count: AtomicU32,
        kinds: Mutex<Vec<String>>,
    }

    impl RecommendationEventCallback for RecordingCallback {
        fn on_fallback(&self, event: events::RecommendationFellBack) {
            self.count.fetch_add(1, Ordering::SeqCst);
            self.kinds.lock().unwrap().push(event.error_kind);
        }
    }

    fn answers() -> AnswerRecord {
        AnswerRecord::default().with(AnswerField::Problem, "work stress and deadlines")
    }

    #[tokio::test]
    async fn local_only_reports_local_source() {
        let engine = FallbackRecommendationEngine::local_only();

        let recommendation = engine.recommend(&answers()).await;

        assert_eq!(recommendation.source, RecommendationSource::Local);
        assert_eq!(recommendation.result, classify(&answers()));
        assert!(engine.preferred_info().is_none());
    }

    #[tokio::test]
    async fn preferred_result_is_used_verbatim() {
        let remote = RecommendationResult::new(Solution::ConsultATherapist, Confidence::new(88));
        let callback = Arc::new(RecordingCallback::default());
        let engine = FallbackRecommendationEngine::local_only()
            .with_preferred(Arc::new(FixedEngine(remote)))
            .with_event_callback(callback.clone());

        let recommendation = engine.recommend(&answers()).await;

        assert_eq!(recommendation.result, remote);
        assert_eq!(recommendation.source, RecommendationSource::Remote);
        assert_eq!(callback.count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn every_error_kind_falls_back() {
        let failures: [fn() -> RecommendationError; 5] = [
            || RecommendationError::network("refused"),
            || RecommendationError::Timeout { timeout_secs: 10 },
            || RecommendationError::Status {
                status: 500,
                body: "boom".to_string(),
            },
            || RecommendationError::malformed("not json"),
            || RecommendationError::unavailable("down"),
        ];
        let callback = Arc::new(RecordingCallback::default());

        for failure in failures {
            let engine = FallbackRecommendationEngine::local_only()
                .with_preferred(Arc::new(FailingEngine(failure)))
                .with_event_callback(callback.clone());

            let recommendation = engine.recommend(&answers()).await;

            assert_eq!(recommendation.source, RecommendationSource::LocalFallback);
            assert_eq!(recommendation.result, classify(&answers()));
        }

        assert_eq!(callback.count.load(Ordering::SeqCst), 5);
        assert_eq!(
            *callback.kinds.lock().unwrap(),
            vec!["network", "timeout", "status", "malformed_response", "unavailable"]
        );
    }

    #[tokio::test]
    async fn fallback_event_names_failed_engine() {
        struct NameCapture(Mutex<Option<String>>);
        impl RecommendationEventCallback for NameCapture {
            fn on_fallback(&self, event: events::RecommendationFellBack) {
                *self.0.lock().unwrap() = Some(event.preferred_engine);
            }
        }

        let capture = Arc::new(NameCapture(Mutex::new(None)));
        let engine = FallbackRecommendationEngine::local_only()
            .with_preferred(Arc::new(FailingEngine(|| RecommendationError::network("x"))))
            .with_event_callback(capture.clone());

        engine.recommend(&answers()).await;

        assert_eq!(capture.0.lock().unwrap().as_deref(), Some("failing"));
    }

    #[test]
    fn event_has_stable_type() {
        let event = events::RecommendationFellBack::new("remote-http", "timeout", "slow");
        assert_eq!(event.event_type(), "recommendation.fell_back");
        assert_eq!(event.preferred_engine, "remote-http");
    }

    #[tokio::test]
    async fn slow_preferred_engine_is_cut_off_at_deadline() {
        let provider = MockAIProvider::new()
            .with_response(r#"{"solution": "Talk to a Friend", "confidence": 90}"#)
            .with_delay(Duration::from_secs(5));
        let callback = Arc::new(RecordingCallback::default());
        let engine = FallbackRecommendationEngine::local_only()
            .with_preferred(Arc::new(LlmRecommendationEngine::new(provider.clone())))
            .with_event_callback(callback.clone())
            .with_deadline(Duration::from_millis(50));

        let started = std::time::Instant::now();
        let recommendation = engine.recommend(&answers()).await;

        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(recommendation.source, RecommendationSource::LocalFallback);
        assert_eq!(recommendation.result, classify(&answers()));
        assert_eq!(provider.call_count(), 1);
        assert_eq!(*callback.kinds.lock().unwrap(), vec!["timeout"]);
    }

    #[tokio::test]
    async fn preferred_engine_within_deadline_is_used() {
        let provider = MockAIProvider::new()
            .with_response(r#"{"solution": "Talk to a Friend", "confidence": 90}"#)
            .with_delay(Duration::from_millis(20));
        let engine = FallbackRecommendationEngine::local_only()
            .with_preferred(Arc::new(LlmRecommendationEngine::new(provider)))
            .with_deadline(Duration::from_secs(2));

        let recommendation = engine.recommend(&answers()).await;

        assert_eq!(recommendation.source, RecommendationSource::Llm);
        assert_eq!(recommendation.result.solution, Solution::TalkToAFriend);
    }
}
