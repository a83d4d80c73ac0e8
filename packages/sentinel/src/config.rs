//! Pipeline configuration.
//!
//! Keyword list, reputation result limit, collaborator timeouts, and the
//! verdict parsing mode.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default scam phrases, lower-case, in reporting order.
pub const DEFAULT_SCAM_KEYWORDS: &[&str] = &[
    "kindly",
    "money order",
    "check processing",
    "telegram",
    "whatsapp",
    "training fee",
    "refundable deposit",
    "google chat interview",
    "wire transfer",
    "cashier's check",
    "urgent response required",
];

/// Domains younger than this many days are flagged as critical.
pub const NEW_DOMAIN_THRESHOLD_DAYS: i64 = 180;

/// Ordered, de-duplicated, lower-case phrase list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScamKeywordList(IndexSet<String>);

impl ScamKeywordList {
    /// Build a list, lower-casing and dropping blanks and repeats.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            phrases
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        )
    }

    /// Append extra phrases after the existing ones.
    pub fn extended<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for phrase in phrases {
            let phrase = phrase.as_ref().trim().to_lowercase();
            if !phrase.is_empty() {
                self.0.insert(phrase);
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ScamKeywordList {
    fn default() -> Self {
        Self::new(DEFAULT_SCAM_KEYWORDS)
    }
}

/// How strictly the first response line must match a verdict literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictParseMode {
    /// Substring containment on the upper-cased first line.
    #[default]
    Lenient,
    /// First line must equal `VERDICT: SAFE|CAUTION|SCAM` exactly.
    Strict,
}

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentinelConfig {
    pub keywords: ScamKeywordList,

    /// Maximum reputation hits kept per search. Default: 3.
    pub reputation_results: usize,

    /// Budget for one registration lookup. Default: 10s.
    #[serde(with = "duration_secs")]
    pub lookup_timeout: Duration,

    /// Budget for one reputation search. Default: 10s.
    #[serde(with = "duration_secs")]
    pub search_timeout: Duration,

    /// Budget for the completion call. Default: 30s.
    #[serde(with = "duration_secs")]
    pub completion_timeout: Duration,

    pub verdict_mode: VerdictParseMode,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            keywords: ScamKeywordList::default(),
            reputation_results: 3,
            lookup_timeout: Duration::from_secs(10),
            search_timeout: Duration::from_secs(10),
            completion_timeout: Duration::from_secs(30),
            verdict_mode: VerdictParseMode::Lenient,
        }
    }
}

impl SentinelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keywords(mut self, keywords: ScamKeywordList) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_reputation_results(mut self, limit: usize) -> Self {
        self.reputation_results = limit;
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn with_search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    pub fn with_verdict_mode(mut self, mode: VerdictParseMode) -> Self {
        self.verdict_mode = mode;
        self
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
