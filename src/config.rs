use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Default OpenAI-compatible API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-16k";
pub const DEFAULT_TEMPERATURE: f32 = 1.0;
pub const DEFAULT_MAX_OUTPUT: u32 = 16_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("No API key configured (set OPENAI_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("Temperature must be between 0 and 2, got {0}")]
    InvalidTemperature(f32),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Everything the upstream client needs, passed in explicitly
#[derive(Clone, PartialEq)]
pub struct GeneratorConfig {
    api_key: String,
    pub api_base: String,
    pub model_id: String,
    pub temperature: f32,
    pub max_output_size: u32,
    pub request_timeout: Option<Duration>,
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model_id", &self.model_id)
            .field("temperature", &self.temperature)
            .field("max_output_size", &self.max_output_size)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Read an env var, trimmed, treating blank as unset
fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parsed<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env_trimmed(name) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { name, value }),
        None => Ok(None),
    }
}

impl GeneratorConfig {
    /// Create a config with defaults for everything except the key
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            api_base: DEFAULT_API_BASE.to_string(),
            model_id: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_size: DEFAULT_MAX_OUTPUT,
            request_timeout: None,
        })
    }

    /// Build from environment variables:
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_BASE_URL`
    /// - `POSTFORGE_MODEL`
    /// - `POSTFORGE_TEMPERATURE`
    /// - `POSTFORGE_MAX_TOKENS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_trimmed("OPENAI_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key)?;

        if let Some(base) = env_trimmed("OPENAI_BASE_URL") {
            config = config.with_api_base(base);
        }
        if let Some(model) = env_trimmed("POSTFORGE_MODEL") {
            config = config.with_model(model);
        }
        if let Some(temperature) = env_parsed::<f32>("POSTFORGE_TEMPERATURE")? {
            config = config.with_temperature(temperature)?;
        }
        if let Some(max) = env_parsed::<u32>("POSTFORGE_MAX_TOKENS")? {
            config = config.with_max_output_size(max);
        }

        Ok(config)
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_id = model.into();
        self
    }

    /// Set sampling temperature, must be in `[0, 2]`
    pub fn with_temperature(mut self, temperature: f32) -> Result<Self, ConfigError> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::InvalidTemperature(temperature));
        }
        self.temperature = temperature;
        Ok(self)
    }

    pub fn with_max_output_size(mut self, max: u32) -> Self {
        self.max_output_size = max;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Full URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
