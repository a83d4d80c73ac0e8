//! Analysis pipeline.
//!
//! One run walks a fixed sequence: domain age (URL input) → reputation
//! (company name given) → keyword scan (any input) → aggregate → prompt →
//! completion → parse. Steps never overlap within a run, and runs share
//! nothing but read-only configuration.

pub mod evidence;
pub mod prompts;
pub mod verdict;

pub use evidence::aggregate;
pub use prompts::{build_verdict_prompt, VERDICT_INSTRUCTIONS, VERDICT_PREAMBLE};
pub use verdict::parse_verdict;

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::config::SentinelConfig;
use crate::error::{CompletionError, Result, SentinelError};
use crate::probes::{scan, DomainAgeProber, ReputationProber};
use crate::traits::{CompletionService, RegistrationLookup, WebSearcher};
use crate::types::{Analysis, AnalysisInput, Evidence, ReputationEvidence};

/// The fraud-analysis pipeline.
///
/// Holds configuration and the three network collaborators. Cheap to share
/// behind an `Arc`; every call to [`analyze`](Self::analyze) is independent.
pub struct Sentinel {
    config: SentinelConfig,
    registry: Arc<dyn RegistrationLookup>,
    searcher: Arc<dyn WebSearcher>,
    ai: Arc<dyn CompletionService>,
}

impl Sentinel {
    pub fn new(
        config: SentinelConfig,
        registry: Arc<dyn RegistrationLookup>,
        searcher: Arc<dyn WebSearcher>,
        ai: Arc<dyn CompletionService>,
    ) -> Self {
        Self {
            config,
            registry,
            searcher,
            ai,
        }
    }

    /// Run the probes for an input and aggregate what they found.
    ///
    /// Never fails; probe failures show up as evidence sentinels.
    pub async fn gather_evidence(&self, input: &AnalysisInput) -> Evidence {
        let input_text = input.input_text();

        let domain_age = match input.probe_url() {
            Some(url) => {
                let prober = DomainAgeProber::new(self.registry.as_ref(), self.config.lookup_timeout);
                Some(prober.probe(url).await)
            }
            None => None,
        };

        let reputation = match input.company_name() {
            Some(company) => {
                let prober = ReputationProber::new(
                    self.searcher.as_ref(),
                    self.config.reputation_results,
                    self.config.search_timeout,
                );
                Some(ReputationEvidence {
                    company: company.to_string(),
                    result: prober.probe(company).await,
                })
            }
            None => None,
        };

        let keyword_hits = scan(&input_text, &self.config.keywords);
        if !keyword_hits.is_empty() {
            info!(hits = keyword_hits.len(), "Suspicious keywords found");
        }

        let context = aggregate(
            domain_age.as_ref(),
            reputation
                .as_ref()
                .map(|r| (r.company.as_str(), &r.result)),
            &keyword_hits,
        );

        Evidence {
            input_text,
            domain_age,
            reputation,
            keyword_hits,
            context,
        }
    }

    /// Full analysis: gather evidence, consult the model, parse its verdict.
    ///
    /// Fails only when there is no input at all or the completion service
    /// fails. An unparseable response is an `Unknown` verdict, not an error.
    pub async fn analyze(&self, input: &AnalysisInput) -> Result<Analysis> {
        let evidence = self.gather_evidence(input).await;
        if !evidence.has_input() {
            return Err(SentinelError::EmptyInput);
        }

        let prompt = build_verdict_prompt(&evidence.input_text, &evidence.context.render());
        let response = self.complete(&prompt).await?;
        let report = parse_verdict(&response, self.config.verdict_mode);

        info!(
            verdict = %report.verdict,
            confidence = %report.confidence,
            "Analysis complete"
        );

        Ok(Analysis { evidence, report })
    }

    async fn complete(&self, prompt: &str) -> std::result::Result<String, CompletionError> {
        let start = Instant::now();
        let timeout = self.config.completion_timeout;

        debug!(
            prompt_length = prompt.len(),
            model = self.ai.model(),
            "Requesting verdict"
        );

        let result = match tokio::time::timeout(timeout, self.ai.complete(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(CompletionError::Timeout(timeout)),
        };

        match &result {
            Ok(response) => debug!(
                response_length = response.len(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Verdict received"
            ),
            Err(e) => error!(
                error = %e,
                model = self.ai.model(),
                "Completion service failed"
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockCompletion, MockRegistry, MockWebSearcher};
    use crate::types::{DomainAgeStatus, FragmentKind, ReputationResult, Verdict};
    use chrono::{Duration as ChronoDuration, Utc};
    use std::time::Duration;

    fn sentinel(
        registry: MockRegistry,
        searcher: MockWebSearcher,
        ai: Arc<MockCompletion>,
    ) -> Sentinel {
        Sentinel::new(
            SentinelConfig::default(),
            Arc::new(registry),
            Arc::new(searcher),
            ai,
        )
    }

    #[tokio::test]
    async fn test_document_input_only_scans_keywords() {
        let registry = Arc::new(MockRegistry::new());
        let searcher = Arc::new(MockWebSearcher::new());
        let sentinel = Sentinel::new(
            SentinelConfig::default(),
            registry.clone(),
            searcher.clone(),
            Arc::new(MockCompletion::responding("VERDICT: CAUTION")),
        );

        let evidence = sentinel
            .gather_evidence(&AnalysisInput::document("Please pay the training fee."))
            .await;

        assert!(evidence.domain_age.is_none());
        assert!(evidence.reputation.is_none());
        assert!(evidence.keyword_hits.contains("training fee"));
        assert!(registry.lookups().is_empty());
        assert!(searcher.queries().is_empty());
    }

    #[tokio::test]
    async fn test_manual_input_runs_reputation() {
        let sentinel = sentinel(
            MockRegistry::new(),
            MockWebSearcher::new().failing(),
            Arc::new(MockCompletion::responding("VERDICT: SAFE")),
        );

        let evidence = sentinel
            .gather_evidence(&AnalysisInput::manual(Some("Acme".into()), None, None))
            .await;

        let reputation = evidence.reputation.unwrap();
        assert_eq!(reputation.company, "Acme");
        assert_eq!(reputation.result, ReputationResult::Unavailable);
        assert!(evidence.context.contains(FragmentKind::Reputation));
    }

    #[tokio::test]
    async fn test_url_input_runs_domain_age() {
        let sentinel = sentinel(
            MockRegistry::new().with_dates("acme.com", vec![Utc::now() - ChronoDuration::days(900)]),
            MockWebSearcher::new(),
            Arc::new(MockCompletion::responding("VERDICT: SAFE")),
        );

        let evidence = sentinel.gather_evidence(&AnalysisInput::url("acme.com")).await;

        assert_eq!(evidence.input_text, "URL to Analyze: acme.com");
        assert_eq!(evidence.domain_age.unwrap().status, DomainAgeStatus::Known);
        assert!(evidence.context.contains(FragmentKind::DomainTrust));
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected_before_model_call() {
        let ai = Arc::new(MockCompletion::responding("VERDICT: SAFE"));
        let sentinel = sentinel(MockRegistry::new(), MockWebSearcher::new(), ai.clone());

        let result = sentinel
            .analyze(&AnalysisInput::manual(None, None, None))
            .await;

        assert!(matches!(result, Err(SentinelError::EmptyInput)));
        assert!(ai.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_completion_failure_aborts_run() {
        let sentinel = sentinel(
            MockRegistry::new(),
            MockWebSearcher::new(),
            Arc::new(MockCompletion::failing()),
        );

        let result = sentinel.analyze(&AnalysisInput::document("Hello")).await;

        assert!(matches!(result, Err(SentinelError::Completion(_))));
    }

    #[tokio::test]
    async fn test_completion_timeout_aborts_run() {
        let ai = Arc::new(MockCompletion::responding("VERDICT: SAFE").with_delay(Duration::from_millis(200)));
        let sentinel = Sentinel::new(
            SentinelConfig::default().with_completion_timeout(Duration::from_millis(20)),
            Arc::new(MockRegistry::new()),
            Arc::new(MockWebSearcher::new()),
            ai,
        );

        let result = sentinel.analyze(&AnalysisInput::document("Hello")).await;

        assert!(matches!(
            result,
            Err(SentinelError::Completion(CompletionError::Timeout(budget)))
                if budget == Duration::from_millis(20)
        ));
    }

    #[tokio::test]
    async fn test_unparseable_response_is_unknown_verdict() {
        let sentinel = sentinel(
            MockRegistry::new(),
            MockWebSearcher::new(),
            Arc::new(MockCompletion::responding("I think this is fine\nDetails here")),
        );

        let analysis = sentinel.analyze(&AnalysisInput::document("Hello")).await.unwrap();

        assert_eq!(analysis.report.verdict, Verdict::Unknown);
        assert_eq!(analysis.report.diagnostic.as_deref(), Some("I think this is fine"));
        assert_eq!(analysis.report.body, "Details here");
    }
}
