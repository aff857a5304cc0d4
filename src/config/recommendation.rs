//! Recommendation engine configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Which engine answers before the local classifier
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnginePreference {
    /// Remote HTTP recommendation endpoint
    Remote,
    /// Language model via OpenAI
    Llm,
    /// Keyword classifier only
    #[default]
    Local,
}

/// Recommendation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// Preferred engine
    #[serde(default)]
    pub primary: EnginePreference,

    /// Remote endpoint URL (required when `primary = remote`)
    pub remote_url: Option<String>,

    /// Remote request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl RecommendationConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Remote URL, if one is configured and non-empty
    pub fn remote_url(&self) -> Option<&str> {
        self.remote_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Validate recommendation configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }

        if let Some(url) = self.remote_url() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidUrl("recommendation.remote_url"));
            }
            if production && !url.starts_with("https://") {
                return Err(ValidationError::RemoteUrlMustBeHttps);
            }
        }

        if self.primary == EnginePreference::Remote && self.remote_url().is_none() {
            return Err(ValidationError::MissingRequired(
                "SEPNOTY__RECOMMENDATION__REMOTE_URL",
            ));
        }

        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            primary: EnginePreference::default(),
            remote_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_local() {
        let config = RecommendationConfig::default();
        assert_eq!(config.primary, EnginePreference::Local);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate(false).is_ok());
    }

    #[test]
    fn test_remote_requires_url() {
        let config = RecommendationConfig {
            primary: EnginePreference::Remote,
            ..Default::default()
        };
        assert_eq!(
            config.validate(false),
            Err(ValidationError::MissingRequired(
                "SEPNOTY__RECOMMENDATION__REMOTE_URL"
            ))
        );
    }

    #[test]
    fn test_empty_url_counts_as_missing() {
        let config = RecommendationConfig {
            primary: EnginePreference::Remote,
            remote_url: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate(false).is_err());
    }

    #[test]
    fn test_url_scheme_checked() {
        let config = RecommendationConfig {
            primary: EnginePreference::Remote,
            remote_url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(false),
            Err(ValidationError::InvalidUrl("recommendation.remote_url"))
        );
    }

    #[test]
    fn test_production_requires_https() {
        let config = RecommendationConfig {
            primary: EnginePreference::Remote,
            remote_url: Some("http://example.com/api/recommendation".to_string()),
            ..Default::default()
        };
        assert!(config.validate(false).is_ok());
        assert_eq!(
            config.validate(true),
            Err(ValidationError::RemoteUrlMustBeHttps)
        );
    }

    #[test]
    fn test_timeout_bounds() {
        let config = RecommendationConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(false), Err(ValidationError::InvalidTimeout));
    }
}
