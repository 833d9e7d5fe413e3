//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
///
/// The API key is optional here: a missing key only surfaces when the
/// first analysis or translation call is made.
#[derive(Debug, Deserialize)]
pub struct AiConfig {
    /// Generation service to call
    #[serde(default)]
    pub provider: AiProvider,

    /// API key for the generation service
    pub api_key: Option<Secret<String>>,

    /// Model used for contract analysis
    #[serde(default = "default_analysis_model")]
    pub analysis_model: String,

    /// Model used for Hindi to English translation
    #[serde(default = "default_translation_model")]
    pub translation_model: String,

    /// Overrides the provider's API base URL
    pub base_url: Option<String>,

    /// Sampling temperature for analysis calls
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds; unset means no local timeout
    pub timeout_secs: Option<u64>,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    OpenAI,
    Mock,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// The configured key, or an empty string when none is set.
    pub fn api_key(&self) -> &str {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .unwrap_or_default()
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key().trim().is_empty()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.analysis_model.trim().is_empty() {
            return Err(ValidationError::EmptyModel("analysis"));
        }
        if self.translation_model.trim().is_empty() {
            return Err(ValidationError::EmptyModel("translation"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidBaseUrl);
            }
        }
        if self.timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            api_key: None,
            analysis_model: default_analysis_model(),
            translation_model: default_translation_model(),
            base_url: None,
            temperature: default_temperature(),
            timeout_secs: None,
        }
    }
}

fn default_analysis_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_translation_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProvider::Gemini);
        assert_eq!(config.analysis_model, "gemini-3-pro-preview");
        assert_eq!(config.translation_model, "gemini-3-flash-preview");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: Some(60),
            ..Default::default()
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_missing_key_still_validates() {
        let config = AiConfig::default();
        assert!(!config.has_api_key());
        assert_eq!(config.api_key(), "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_key_exposed_on_request() {
        let config = AiConfig {
            api_key: Some(Secret::new("gm-key".to_string())),
            ..Default::default()
        };
        assert!(config.has_api_key());
        assert_eq!(config.api_key(), "gm-key");
        assert!(!format!("{:?}", config).contains("gm-key"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = AiConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTemperature));

        let config = AiConfig {
            analysis_model: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyModel("analysis")));

        let config = AiConfig {
            base_url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));

        let config = AiConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }
}
