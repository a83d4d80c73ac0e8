//! Text completion service.

use async_trait::async_trait;

use crate::error::CompletionResult;

/// Single-shot text completion: one prompt in, one response out.
///
/// No streaming, no conversation state, no tool calls.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Complete a prompt, returning the raw response text.
    async fn complete(&self, prompt: &str) -> CompletionResult<String>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
