//! Internship Offer Fraud Analysis
//!
//! Collects objective evidence about an internship offer and asks a language
//! model for a structured SAFE / CAUTION / SCAM verdict grounded in that
//! evidence.
//!
//! # Pipeline
//!
//! 1. **Domain age**: RDAP registration date of the offer's URL
//! 2. **Reputation**: web search for scam reports about the company
//! 3. **Keywords**: scan of the offer text for known scam phrases
//! 4. **Aggregate**: evidence fragments rendered into a forensic context
//! 5. **Verdict**: prompt the model, parse the first-line verdict
//!
//! Probe failures never abort a run; they become evidence ("could not
//! verify"). Only an empty input or a failed completion call is an error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sentinel::{AnalysisInput, Sentinel, SentinelConfig};
//! use sentinel::providers::{GeminiCompletion, RdapLookup, TavilyWebSearcher};
//!
//! let config = SentinelConfig::default();
//! let sentinel = Sentinel::new(
//!     config.clone(),
//!     Arc::new(RdapLookup::new(config.lookup_timeout)),
//!     Arc::new(TavilyWebSearcher::new(tavily_key, config.search_timeout)),
//!     Arc::new(GeminiCompletion::new(google_key, config.completion_timeout)),
//! );
//!
//! let analysis = sentinel.analyze(&AnalysisInput::url("https://acme-careers.xyz")).await?;
//! println!("{}", analysis.report.verdict.headline());
//! ```
//!
//! # Modules
//!
//! - [`types`] - Inputs, evidence, and verdicts
//! - [`traits`] - Collaborator seams (registry, search, completion, documents)
//! - [`probes`] - Domain age, reputation, and keyword probes
//! - [`pipeline`] - Aggregation, prompt, verdict parsing, and the [`Sentinel`] runner
//! - [`providers`] - RDAP, Tavily, OpenAI, and Gemini implementations
//! - [`documents`] - Plain text and PDF extraction
//! - [`testing`] - Mock collaborators

pub mod config;
pub mod documents;
pub mod error;
pub mod pipeline;
pub mod probes;
pub mod providers;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

pub use config::{
    ScamKeywordList, SentinelConfig, VerdictParseMode, DEFAULT_SCAM_KEYWORDS,
    NEW_DOMAIN_THRESHOLD_DAYS,
};
pub use error::{
    CompletionError, DocumentError, LookupError, Result, SearchError, SentinelError,
};
pub use pipeline::{aggregate, build_verdict_prompt, parse_verdict, Sentinel};
pub use probes::{extract_host, normalize_url, reputation_query, scan};
pub use security::ApiKey;
pub use traits::{CompletionService, DocumentExtractor, RegistrationLookup, SearchHit, WebSearcher};
pub use types::{
    Analysis, AnalysisInput, Confidence, DomainAgeResult, DomainAgeStatus, Evidence,
    EvidenceFragment, ForensicContext, FragmentKind, ReputationEvidence, ReputationHit,
    ReputationResult, Verdict, VerdictReport,
};

pub use testing::{MockCompletion, MockRegistry, MockWebSearcher};
