//! Probe outputs: domain age and web reputation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display value when the input could not be reduced to a host.
pub const DISPLAY_INVALID_URL: &str = "Invalid URL";

/// Display value when the registry answered without a creation date.
pub const DISPLAY_UNKNOWN: &str = "Unknown";

/// Display value when the lookup itself failed.
pub const DISPLAY_HIDDEN_OR_ERROR: &str = "Hidden/Error";

/// How a domain-age probe ended.
///
/// The three non-`Known` states all leave `age_days` empty. They must never be
/// read as "age 0", which would turn every failed lookup into a critical
/// new-domain warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainAgeStatus {
    /// Creation date found and age computed.
    Known,
    /// Input could not be parsed into a host; no lookup was made.
    InvalidUrl,
    /// Lookup succeeded but carried no creation date.
    Unknown,
    /// Lookup failed: network, throttling, missing record, privacy proxy, timeout.
    HiddenOrError,
}

/// Result of a domain registration-age probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAgeResult {
    /// Host the lookup was made for, when one could be extracted.
    pub host: Option<String>,

    /// `%Y-%m-%d` creation date, or one of the `DISPLAY_*` markers.
    pub registration_date_display: String,

    /// Whole days since registration. `None` for every unknown state.
    pub age_days: Option<i64>,

    pub status: DomainAgeStatus,
}

impl DomainAgeResult {
    pub fn known(host: impl Into<String>, created: DateTime<Utc>, age_days: i64) -> Self {
        Self {
            host: Some(host.into()),
            registration_date_display: created.format("%Y-%m-%d").to_string(),
            age_days: Some(age_days),
            status: DomainAgeStatus::Known,
        }
    }

    pub fn invalid_url() -> Self {
        Self {
            host: None,
            registration_date_display: DISPLAY_INVALID_URL.to_string(),
            age_days: None,
            status: DomainAgeStatus::InvalidUrl,
        }
    }

    pub fn unknown(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            registration_date_display: DISPLAY_UNKNOWN.to_string(),
            age_days: None,
            status: DomainAgeStatus::Unknown,
        }
    }

    pub fn hidden_or_error(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            registration_date_display: DISPLAY_HIDDEN_OR_ERROR.to_string(),
            age_days: None,
            status: DomainAgeStatus::HiddenOrError,
        }
    }
}

/// One web search hit about the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl ReputationHit {
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

/// Result of a reputation search.
///
/// `NoReports` is weak positive evidence; `Unavailable` is no evidence at all.
/// They render differently so the model can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "hits", rename_all = "snake_case")]
pub enum ReputationResult {
    /// Search succeeded with at least one hit.
    Found(Vec<ReputationHit>),
    /// Search succeeded with zero hits.
    NoReports,
    /// Search failed or timed out.
    Unavailable,
}

impl ReputationResult {
    /// Evidence text for the forensic context.
    pub fn render(&self) -> String {
        match self {
            Self::Found(hits) => hits
                .iter()
                .map(|hit| format!("- [{}]({}): {}", hit.title, hit.url, hit.snippet))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::NoReports => "No specific scam reports found.".to_string(),
            Self::Unavailable => {
                "⚠️ Could not verify company reputation online (Network/API Limit).".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_known_result_formats_date() {
        let created = Utc.with_ymd_and_hms(2019, 3, 7, 12, 0, 0).unwrap();
        let result = DomainAgeResult::known("example.com", created, 2000);
        assert_eq!(result.registration_date_display, "2019-03-07");
        assert_eq!(result.age_days, Some(2000));
        assert_eq!(result.status, DomainAgeStatus::Known);
    }

    #[test]
    fn test_unknown_states_have_no_age() {
        for result in [
            DomainAgeResult::invalid_url(),
            DomainAgeResult::unknown("example.com"),
            DomainAgeResult::hidden_or_error("example.com"),
        ] {
            assert_eq!(result.age_days, None);
        }
        assert_eq!(DomainAgeResult::invalid_url().registration_date_display, "Invalid URL");
        assert_eq!(DomainAgeResult::unknown("a.com").registration_date_display, "Unknown");
        assert_eq!(
            DomainAgeResult::hidden_or_error("a.com").registration_date_display,
            "Hidden/Error"
        );
    }

    #[test]
    fn test_found_renders_markdown_list() {
        let result = ReputationResult::Found(vec![
            ReputationHit::new("Acme scam?", "https://forum.example/acme", "Asked for a deposit"),
            ReputationHit::new("Acme reviews", "https://reviews.example/acme", "Mixed reviews"),
        ]);
        assert_eq!(
            result.render(),
            "- [Acme scam?](https://forum.example/acme): Asked for a deposit\n\
             - [Acme reviews](https://reviews.example/acme): Mixed reviews"
        );
    }

    #[test]
    fn test_no_reports_and_unavailable_render_differently() {
        assert_ne!(ReputationResult::NoReports.render(), ReputationResult::Unavailable.render());
    }
}
