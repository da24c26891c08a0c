//! Process-wide configuration for the completion client.
//!
//! Values come from the environment. The binary loads `.env` files before
//! calling [`LlmConfig::from_env`], so either source works.

use std::{fmt, str::FromStr, time::Duration};

use crate::error::{PlannerError, Result};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable selecting the model.
pub const MODEL_ENV: &str = "PLANWRIGHT_MODEL";
/// Environment variable overriding the endpoint base URL.
pub const BASE_URL_ENV: &str = "PLANWRIGHT_BASE_URL";
/// Environment variable with the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "PLANWRIGHT_TIMEOUT_SECS";
/// Environment variable with the sampling temperature.
pub const TEMPERATURE_ENV: &str = "PLANWRIGHT_TEMPERATURE";
/// Environment variable with the response token limit.
pub const MAX_TOKENS_ENV: &str = "PLANWRIGHT_MAX_TOKENS";

/// Completion endpoint configuration.
#[derive(Clone, PartialEq)]
pub struct LlmConfig {
    /// API credential; generation degrades without one
    pub api_key: Option<String>,

    /// Model identifier
    pub model: String,

    /// Base URL of an OpenAI-compatible API
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens per response
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
            temperature: 0.7,
            max_tokens: 3000,
        }
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl LlmConfig {
    /// Build configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if a numeric variable does not
    /// parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let timeout = match get(TIMEOUT_ENV) {
            Some(value) => Duration::from_secs(parse_var(TIMEOUT_ENV, &value)?),
            None => defaults.timeout,
        };
        if timeout.is_zero() {
            return Err(PlannerError::configuration(format!(
                "{TIMEOUT_ENV} must be greater than zero"
            )));
        }

        Ok(Self {
            api_key: get(API_KEY_ENV),
            model: get(MODEL_ENV).unwrap_or(defaults.model),
            base_url: get(BASE_URL_ENV)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout,
            temperature: match get(TEMPERATURE_ENV) {
                Some(value) => parse_var(TEMPERATURE_ENV, &value)?,
                None => defaults.temperature,
            },
            max_tokens: match get(MAX_TOKENS_ENV) {
                Some(value) => parse_var(MAX_TOKENS_ENV, &value)?,
                None => defaults.max_tokens,
            },
        })
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the API credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether a credential is available for generation calls.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse().map_err(|e| {
        PlannerError::configuration(format!("Invalid value '{value}' for {key}: {e}"))
    })
}
