//! Recommendation engine adapters.
//!
//! - [`KeywordRecommendationEngine`] - local keyword classifier
//! - [`HttpRecommendationEngine`] - remote JSON endpoint
//! - [`LlmRecommendationEngine`] - language model via an [`AIProvider`](crate::ports::AIProvider)
//! - [`FallbackRecommendationEngine`] - tries a preferred engine, falls back to local
//!
//! [`build_engine`] assembles the orchestrator from configuration.

mod factory;
mod fallback_engine;
mod http_engine;
mod keyword_engine;
mod llm_engine;
pub mod payload;

pub use factory::build_engine;
pub use fallback_engine::{
    events, FallbackRecommendationEngine, NoOpEventCallback, RecommendationEventCallback,
};
pub use http_engine::{HttpEngineConfig, HttpRecommendationEngine};
pub use keyword_engine::KeywordRecommendationEngine;
pub use llm_engine::{build_prompt, LlmRecommendationEngine};
