//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecommendationEngine` - Anything that turns answers into a recommendation
//! - `AIProvider` - Chat completion providers used by the LLM engine

mod ai_provider;
mod recommendation_engine;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use recommendation_engine::{EngineInfo, RecommendationEngine, RecommendationError};
