//! Web search trait used for reputation checks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SearchResult;

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    /// Description / content excerpt from the provider.
    pub snippet: String,
}

impl SearchHit {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }
}

/// Open-web search.
///
/// # Implementations
///
/// - `TavilyWebSearcher` - Tavily API
/// - `UnconfiguredSearcher` - always fails, for runs without a search key
/// - `MockWebSearcher` - for testing
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Search the web, returning at most `limit` hits.
    async fn search(&self, query: &str, limit: usize) -> SearchResult<Vec<SearchHit>>;
}
