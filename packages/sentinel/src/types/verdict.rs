//! Verdict types parsed out of the model response.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk category for an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Safe,
    Caution,
    Scam,
    /// The response did not open with a recognised verdict literal.
    Unknown,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Caution => "CAUTION",
            Self::Scam => "SCAM",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// The exact first-line literal the prompt asks for. `Unknown` has none.
    pub fn literal(&self) -> Option<&'static str> {
        match self {
            Self::Safe => Some("VERDICT: SAFE"),
            Self::Caution => Some("VERDICT: CAUTION"),
            Self::Scam => Some("VERDICT: SCAM"),
            Self::Unknown => None,
        }
    }

    /// Short banner text shown next to the verdict.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Safe => "This appears to be a legitimate opportunity.",
            Self::Caution => "Some risks detected. Verify carefully before proceeding.",
            Self::Scam => "Do not interact. This has multiple signs of fraud.",
            Self::Unknown => "The analyst did not return a recognised verdict.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence the model reported for its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
    Unspecified,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Unspecified => "UNSPECIFIED",
        };
        f.write_str(label)
    }
}

/// Structured form of one model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictReport {
    pub verdict: Verdict,
    pub confidence: Confidence,

    /// Markdown report following the verdict line, rendered as-is.
    pub body: String,

    /// Literal first line when the verdict could not be recognised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}
