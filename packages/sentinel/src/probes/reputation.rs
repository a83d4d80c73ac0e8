//! Company reputation probe backed by web search.

use std::time::Duration;
use tracing::{info, warn};

use crate::error::SearchError;
use crate::traits::WebSearcher;
use crate::types::{ReputationHit, ReputationResult};

/// Search query for a company's scam reports. The name is quoted verbatim.
pub fn reputation_query(company_name: &str) -> String {
    format!("\"{}\" scam review fraud complaints", company_name)
}

/// Searches the web for scam reports about a company.
///
/// A failed search is `Unavailable`, never an error and never `NoReports`.
pub struct ReputationProber<'a> {
    searcher: &'a dyn WebSearcher,
    limit: usize,
    timeout: Duration,
}

impl<'a> ReputationProber<'a> {
    pub fn new(searcher: &'a dyn WebSearcher, limit: usize, timeout: Duration) -> Self {
        Self {
            searcher,
            limit,
            timeout,
        }
    }

    pub async fn probe(&self, company_name: &str) -> ReputationResult {
        let query = reputation_query(company_name);

        let search = match tokio::time::timeout(self.timeout, self.searcher.search(&query, self.limit)).await
        {
            Ok(result) => result,
            Err(_) => Err(SearchError::Timeout(self.timeout)),
        };

        match search {
            Ok(hits) => {
                // Providers may return more than asked for.
                let hits: Vec<ReputationHit> = hits
                    .into_iter()
                    .take(self.limit)
                    .map(|hit| ReputationHit::new(hit.title, hit.url, hit.snippet))
                    .collect();
                if hits.is_empty() {
                    info!(company = company_name, "No reputation hits");
                    ReputationResult::NoReports
                } else {
                    info!(company = company_name, hits = hits.len(), "Reputation hits found");
                    ReputationResult::Found(hits)
                }
            }
            Err(e) => {
                warn!(company = company_name, error = %e, "Reputation search failed");
                ReputationResult::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchResult;
    use crate::testing::MockWebSearcher;
    use crate::traits::SearchHit;

    fn hit(n: usize) -> SearchHit {
        SearchHit::new(
            format!("Result {}", n),
            format!("https://reviews.example/{}", n),
            format!("Snippet {}", n),
        )
    }

    #[test]
    fn test_query_quotes_company_verbatim() {
        assert_eq!(
            reputation_query("Acme Global LLC"),
            "\"Acme Global LLC\" scam review fraud complaints"
        );
    }

    #[tokio::test]
    async fn test_hits_truncated_to_limit() {
        let searcher = MockWebSearcher::new()
            .with_hits(&reputation_query("Acme"), (1..=5).map(hit).collect());
        let prober = ReputationProber::new(&searcher, 3, Duration::from_secs(5));

        let result = prober.probe("Acme").await;

        match result {
            ReputationResult::Found(hits) => {
                assert_eq!(hits.len(), 3);
                assert_eq!(hits[0].title, "Result 1");
            }
            other => panic!("expected hits, got {:?}", other),
        }
        assert_eq!(searcher.queries(), vec![reputation_query("Acme")]);
    }

    /// Returns every hit it holds, whatever the limit.
    struct OverfullSearcher(Vec<SearchHit>);

    #[async_trait::async_trait]
    impl WebSearcher for OverfullSearcher {
        async fn search(&self, _query: &str, _limit: usize) -> SearchResult<Vec<SearchHit>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_overfull_provider_truncated_to_limit() {
        let searcher = OverfullSearcher((1..=5).map(hit).collect());
        let prober = ReputationProber::new(&searcher, 2, Duration::from_secs(5));

        match prober.probe("Acme").await {
            ReputationResult::Found(hits) => assert_eq!(hits.len(), 2),
            other => panic!("expected hits, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_zero_limit_is_no_reports_not_empty_found() {
        let searcher = OverfullSearcher(vec![hit(1)]);
        let prober = ReputationProber::new(&searcher, 0, Duration::from_secs(5));

        assert_eq!(prober.probe("Acme").await, ReputationResult::NoReports);
    }

    #[tokio::test]
    async fn test_zero_hits_is_no_reports() {
        let searcher = MockWebSearcher::new().with_hits(&reputation_query("Quiet Co"), vec![]);
        let prober = ReputationProber::new(&searcher, 3, Duration::from_secs(5));

        assert_eq!(prober.probe("Quiet Co").await, ReputationResult::NoReports);
    }

    #[tokio::test]
    async fn test_search_failure_is_unavailable() {
        let searcher = MockWebSearcher::new().failing();
        let prober = ReputationProber::new(&searcher, 3, Duration::from_secs(5));

        assert_eq!(prober.probe("Acme").await, ReputationResult::Unavailable);
    }

    #[tokio::test]
    async fn test_slow_search_is_unavailable() {
        let searcher = MockWebSearcher::new()
            .with_hits(&reputation_query("Acme"), vec![hit(1)])
            .with_delay(Duration::from_millis(200));
        let prober = ReputationProber::new(&searcher, 3, Duration::from_millis(20));

        assert_eq!(prober.probe("Acme").await, ReputationResult::Unavailable);
    }
}
