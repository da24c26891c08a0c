//! Completion client for the hosted language model.
//!
//! The rest of the crate only sees the [`CompletionClient`] trait; the
//! OpenAI-compatible HTTP implementation lives in [`openai`].

use std::sync::Arc;

use log::debug;

pub mod client;
mod error;
pub mod openai;

pub use client::CompletionClient;
pub use error::LlmError;
pub use openai::OpenAiClient;

use crate::config::LlmConfig;

/// Create the HTTP completion client described by the configuration.
///
/// # Errors
///
/// Returns `LlmError::Authentication` when the configuration carries no
/// credential.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn CompletionClient>, LlmError> {
    debug!("create_client: model {}", config.model);
    Ok(Arc::new(OpenAiClient::from_config(config)?))
}
