//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Language model providers (OpenAI, mock)
//! - `recommendation` - Recommendation engines and the fallback orchestrator
//! - `http` - REST API (axum)

pub mod ai;
pub mod http;
pub mod recommendation;

pub use recommendation::{
    FallbackRecommendationEngine, HttpEngineConfig, HttpRecommendationEngine,
    KeywordRecommendationEngine, LlmRecommendationEngine,
};
