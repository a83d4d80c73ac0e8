//! Mock collaborators for testing.
//!
//! Deterministic stand-ins for the registry, search, and completion
//! services, with call recording for assertions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{
    CompletionError, CompletionResult, LookupError, LookupResult, SearchError, SearchResult,
};
use crate::traits::{CompletionService, RegistrationLookup, SearchHit, WebSearcher};

// =============================================================================
// Mock Registry
// =============================================================================

/// Registration lookup answering from a fixed table.
///
/// Hosts missing from the table fail with `LookupError::NotFound`.
#[derive(Default)]
pub struct MockRegistry {
    records: HashMap<String, Vec<DateTime<Utc>>>,
    delay: Option<Duration>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer lookups for `host` with these creation dates.
    pub fn with_dates(mut self, host: &str, dates: Vec<DateTime<Utc>>) -> Self {
        self.records.insert(host.to_string(), dates);
        self
    }

    /// Sleep before answering, to exercise timeouts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Hosts looked up so far.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistrationLookup for MockRegistry {
    async fn creation_dates(&self, host: &str) -> LookupResult<Vec<DateTime<Utc>>> {
        self.lookups.lock().unwrap().push(host.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.records
            .get(host)
            .cloned()
            .ok_or_else(|| LookupError::NotFound {
                host: host.to_string(),
            })
    }
}

// =============================================================================
// Mock Web Searcher
// =============================================================================

/// Web searcher answering from a fixed query table.
///
/// Unknown queries return zero hits.
#[derive(Default)]
pub struct MockWebSearcher {
    results: HashMap<String, Vec<SearchHit>>,
    fail: bool,
    delay: Option<Duration>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockWebSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hits(mut self, query: &str, hits: Vec<SearchHit>) -> Self {
        self.results.insert(query.to_string(), hits);
        self
    }

    /// Fail every search like a rate-limited provider.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queries issued so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebSearcher for MockWebSearcher {
    async fn search(&self, query: &str, limit: usize) -> SearchResult<Vec<SearchHit>> {
        self.queries.lock().unwrap().push(query.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(SearchError::Api {
                status: 429,
                message: "rate limited".to_string(),
            });
        }

        let mut hits = self.results.get(query).cloned().unwrap_or_default();
        hits.truncate(limit);
        Ok(hits)
    }
}

// =============================================================================
// Mock Completion
// =============================================================================

/// Completion service returning a canned response.
pub struct MockCompletion {
    response: Option<String>,
    delay: Option<Duration>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockCompletion {
    /// Always answer with `response`.
    pub fn responding(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            delay: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every call like an expired API key.
    pub fn failing() -> Self {
        Self {
            response: None,
            delay: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.response
            .clone()
            .ok_or_else(|| CompletionError::Api("invalid API key".to_string()))
    }

    fn model(&self) -> &str {
        "mock"
    }
}
