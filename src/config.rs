//! Configuration management for Agent Lab.
//!
//! Configuration can be set via environment variables (a `.env` file in the
//! working directory is loaded first if present):
//! - `GEMINI_API_KEY` - Required. API key for the Gemini OpenAI-compatible endpoint.
//! - `LLM_BASE_URL` - Optional. Base URL of the chat completions endpoint.
//!   Defaults to the Gemini OpenAI-compatible endpoint.
//! - `DEFAULT_MODEL` - Optional. Overrides the per-demo model identifier.
//! - `MAX_TOOL_ROUNDS` - Optional. Maximum tool-call rounds per run. Defaults to `8`.
//! - `OPENWEATHER_API_KEY` - Optional. Key for the weather tool.
//! - `SHIPENGINE_API_KEY` - Optional. Key for the shipping-rate tool.

use thiserror::Error;

/// Default base URL: Gemini's OpenAI-compatible endpoint.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Process-wide configuration shared by the demo binaries.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the hosted model endpoint
    pub gemini_api_key: String,

    /// Chat completions base URL (OpenAI-compatible)
    pub base_url: String,

    /// Model identifier override; demos pin their own model when unset
    pub default_model: Option<String>,

    /// Maximum tool-call rounds before a run is aborted
    pub max_tool_rounds: usize,

    /// OpenWeather API key (weather tool only)
    pub openweather_api_key: Option<String>,

    /// ShipEngine API key (shipping-rate tool only)
    pub shipengine_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `GEMINI_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load a .env file if one exists; real env vars take precedence.
        let _ = dotenvy::dotenv();

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let base_url =
            std::env::var("LLM_BASE_URL").unwrap_or_else(|_| GEMINI_BASE_URL.to_string());

        let default_model = std::env::var("DEFAULT_MODEL").ok();

        let max_tool_rounds = std::env::var("MAX_TOOL_ROUNDS")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("MAX_TOOL_ROUNDS".to_string(), format!("{}", e)))?;

        Ok(Self {
            gemini_api_key,
            base_url,
            default_model,
            max_tool_rounds,
            openweather_api_key: std::env::var("OPENWEATHER_API_KEY").ok(),
            shipengine_api_key: std::env::var("SHIPENGINE_API_KEY").ok(),
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(gemini_api_key: String) -> Self {
        Self {
            gemini_api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            default_model: None,
            max_tool_rounds: 8,
            openweather_api_key: None,
            shipengine_api_key: None,
        }
    }

    /// The model a demo should use: the env override if set, else its own pin.
    pub fn model_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.default_model.as_deref().unwrap_or(fallback)
    }

    /// Weather key, or the fatal configuration error the weather demo needs.
    pub fn require_openweather(&self) -> Result<&str, ConfigError> {
        self.openweather_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENWEATHER_API_KEY".to_string()))
    }

    /// ShipEngine key, or the fatal configuration error the shipping demo
    /// raises before any network call.
    pub fn require_shipengine(&self) -> Result<&str, ConfigError> {
        self.shipengine_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("SHIPENGINE_API_KEY".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_override_beats_demo_pin() {
        let mut config = Config::new("test-key".to_string());
        assert_eq!(config.model_or("gemini-2.0-flash"), "gemini-2.0-flash");

        config.default_model = Some("gemini-2.5-flash".to_string());
        assert_eq!(config.model_or("gemini-2.0-flash"), "gemini-2.5-flash");
    }

    #[test]
    fn optional_keys_error_when_required() {
        let config = Config::new("test-key".to_string());
        assert!(matches!(
            config.require_shipengine(),
            Err(ConfigError::MissingEnvVar(ref name)) if name == "SHIPENGINE_API_KEY"
        ));
        assert!(matches!(
            config.require_openweather(),
            Err(ConfigError::MissingEnvVar(ref name)) if name == "OPENWEATHER_API_KEY"
        ));
    }
}
