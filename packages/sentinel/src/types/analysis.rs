//! Per-run output types.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::{DomainAgeResult, ForensicContext, ReputationResult, VerdictReport};

/// Company the reputation search ran for, paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationEvidence {
    pub company: String,
    pub result: ReputationResult,
}

/// Everything the probes found for one input, before the model is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Text block built from the input, shown to the model verbatim.
    pub input_text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_age: Option<DomainAgeResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation: Option<ReputationEvidence>,

    /// Matched scam phrases, in keyword list order.
    pub keyword_hits: IndexSet<String>,

    pub context: ForensicContext,
}

impl Evidence {
    pub fn has_input(&self) -> bool {
        !self.input_text.trim().is_empty()
    }
}

/// Result of a full analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub evidence: Evidence,
    pub report: VerdictReport,
}
