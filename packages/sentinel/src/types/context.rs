//! Forensic context: the evidence bundle handed to the model.

use serde::{Deserialize, Serialize};

/// Which probe produced a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// Domain age could not be established.
    DomainUnverified,
    /// Domain is younger than the trust threshold.
    DomainCritical,
    /// Domain is old enough to count in its favour.
    DomainTrust,
    Reputation,
    KeywordAlert,
}

/// One piece of rendered evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceFragment {
    pub kind: FragmentKind,
    pub text: String,
}

/// Ordered evidence fragments for a single run.
///
/// Fragments are appended domain age first, then reputation, then keyword
/// alert. Rendering is plain concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForensicContext {
    fragments: Vec<EvidenceFragment>,
}

impl ForensicContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: FragmentKind, text: impl Into<String>) {
        self.fragments.push(EvidenceFragment {
            kind,
            text: text.into(),
        });
    }

    pub fn fragments(&self) -> &[EvidenceFragment] {
        &self.fragments
    }

    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.fragments.iter().any(|f| f.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn render(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}
