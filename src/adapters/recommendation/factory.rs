//! Builds the fallback orchestrator from configuration.

use std::sync::Arc;

use secrecy::ExposeSecret;

use super::{
    FallbackRecommendationEngine, HttpEngineConfig, HttpRecommendationEngine,
    LlmRecommendationEngine,
};
use crate::adapters::ai::{OpenAIConfig, OpenAIProvider};
use crate::config::{AiConfig, EnginePreference, RecommendationConfig};
use crate::ports::{RecommendationEngine, RecommendationError};

/// Wires the preferred engine named by `recommendation.primary`.
pub fn build_engine(
    recommendation: &RecommendationConfig,
    ai: &AiConfig,
) -> Result<FallbackRecommendationEngine, RecommendationError> {
    let engine = FallbackRecommendationEngine::local_only();

    let (preferred, deadline) = match recommendation.primary {
        EnginePreference::Local => return Ok(engine),
        EnginePreference::Remote => {
            let url = recommendation
                .remote_url()
                .ok_or_else(|| RecommendationError::unavailable("remote URL not configured"))?;
            let http = HttpRecommendationEngine::new(
                HttpEngineConfig::new(url).with_timeout(recommendation.timeout()),
            )?;
            (
                Arc::new(http) as Arc<dyn RecommendationEngine>,
                recommendation.timeout(),
            )
        }
        EnginePreference::Llm => {
            let key = ai
                .openai_api_key
                .as_ref()
                .filter(|_| ai.has_openai())
                .ok_or_else(|| RecommendationError::unavailable("OpenAI API key not configured"))?;
            let provider = OpenAIProvider::new(
                OpenAIConfig::new(key.expose_secret().clone())
                    .with_model(ai.model.clone())
                    .with_base_url(ai.base_url.clone())
                    .with_timeout(ai.timeout()),
            )?;
            (
                Arc::new(LlmRecommendationEngine::new(provider)) as Arc<dyn RecommendationEngine>,
                ai.timeout(),
            )
        }
    };

    let info = preferred.engine_info();
    tracing::info!(engine = %info.name, source = %info.source, "Preferred recommendation engine configured");

    Ok(engine.with_preferred(preferred).with_deadline(deadline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::RecommendationSource;
    use secrecy::Secret;

    #[test]
    fn local_preference_has_no_preferred_engine() {
        let engine =
            build_engine(&RecommendationConfig::default(), &AiConfig::default()).unwrap();
        assert!(engine.preferred_info().is_none());
    }

    #[test]
    fn remote_preference_uses_http_engine() {
        let config = RecommendationConfig {
            primary: EnginePreference::Remote,
            remote_url: Some("http://localhost:9000/api/recommendation".to_string()),
            ..Default::default()
        };

        let engine = build_engine(&config, &AiConfig::default()).unwrap();

        let info = engine.preferred_info().unwrap();
        assert_eq!(info.source, RecommendationSource::Remote);
    }

    #[test]
    fn remote_preference_without_url_fails() {
        let config = RecommendationConfig {
            primary: EnginePreference::Remote,
            ..Default::default()
        };
        assert!(build_engine(&config, &AiConfig::default()).is_err());
    }

    #[test]
    fn llm_preference_uses_configured_model() {
        let config = RecommendationConfig {
            primary: EnginePreference::Llm,
            ..Default::default()
        };
        let ai = AiConfig {
            openai_api_key: Some(Secret::new("sk-test".to_string())),
            model: "gpt-4o-mini".to_string(),
            ..Default::default()
        };

        let engine = build_engine(&config, &ai).unwrap();

        let info = engine.preferred_info().unwrap();
        assert_eq!(info.source, RecommendationSource::Llm);
        assert_eq!(info.name, "llm:gpt-4o-mini");
    }

    #[test]
    fn llm_preference_without_key_fails() {
        let config = RecommendationConfig {
            primary: EnginePreference::Llm,
            ..Default::default()
        };
        assert!(build_engine(&config, &AiConfig::default()).is_err());
    }
}
