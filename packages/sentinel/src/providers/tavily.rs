//! Tavily-backed web search.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{SearchError, SearchResult};
use crate::security::ApiKey;
use crate::traits::{SearchHit, WebSearcher};

const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    search_depth: &'static str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    url: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl From<TavilyResult> for SearchHit {
    fn from(result: TavilyResult) -> Self {
        SearchHit {
            title: result.title.unwrap_or_else(|| result.url.clone()),
            url: result.url,
            snippet: result.content.unwrap_or_default(),
        }
    }
}

/// Web searcher using Tavily's search API.
pub struct TavilyWebSearcher {
    client: reqwest::Client,
    api_key: ApiKey,
}

impl TavilyWebSearcher {
    pub fn new(api_key: ApiKey, timeout: Duration) -> Self {
        Self {
            client: super::http_client(timeout),
            api_key,
        }
    }
}

#[async_trait]
impl WebSearcher for TavilyWebSearcher {
    async fn search(&self, query: &str, limit: usize) -> SearchResult<Vec<SearchHit>> {
        let request = TavilyRequest {
            query,
            search_depth: "basic",
            max_results: limit,
        };

        let response = self
            .client
            .post(TAVILY_SEARCH_URL)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: TavilyResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(body
            .results
            .into_iter()
            .take(limit)
            .map(SearchHit::from)
            .collect())
    }
}

/// Searcher used when no search API key is configured.
///
/// Always fails, so the evidence reads "could not verify" rather than the
/// misleading "no reports found".
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredSearcher;

#[async_trait]
impl WebSearcher for UnconfiguredSearcher {
    async fn search(&self, _query: &str, _limit: usize) -> SearchResult<Vec<SearchHit>> {
        tracing::warn!("Reputation search requested but no search API key is configured");
        Err(SearchError::NotConfigured)
    }
}
