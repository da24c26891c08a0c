//! CompletionClient trait definition

use async_trait::async_trait;

use super::LlmError;
use crate::prompt::Prompt;

/// Stateless completion client - each call is independent.
///
/// Implementations return the raw text of the model's reply; interpreting it
/// is the parser's job.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a single prompt and wait for the complete reply.
    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError>;
}
