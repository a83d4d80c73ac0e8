//! Concrete collaborators: RDAP registry, Tavily search, OpenAI and Gemini
//! completions.

pub mod gemini;
pub mod openai;
pub mod rdap;
pub mod tavily;

pub use gemini::GeminiCompletion;
pub use openai::OpenAiCompletion;
pub use rdap::RdapLookup;
pub use tavily::{TavilyWebSearcher, UnconfiguredSearcher};

use async_trait::async_trait;
use std::time::Duration;

use crate::error::{CompletionError, CompletionResult};
use crate::traits::CompletionService;

/// Build an HTTP client with a request timeout, falling back to the default
/// client if the builder fails.
pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("sentinel/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to build HTTP client, using defaults");
            reqwest::Client::new()
        })
}

/// Completion service used when no model API key is configured.
///
/// Lets evidence-only runs build a [`Sentinel`](crate::Sentinel); any
/// attempt to reach the model fails with `CompletionError::Config`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredCompletion;

#[async_trait]
impl CompletionService for UnconfiguredCompletion {
    async fn complete(&self, _prompt: &str) -> CompletionResult<String> {
        Err(CompletionError::Config(
            "no completion API key configured".to_string(),
        ))
    }

    fn model(&self) -> &str {
        "none"
    }
}
