//! Evidence aggregation.
//!
//! Pure composition of probe outputs into a [`ForensicContext`]. The wording
//! and the 180-day threshold are part of the prompt the model was tuned on.

use indexmap::IndexSet;

use crate::config::NEW_DOMAIN_THRESHOLD_DAYS;
use crate::types::{
    DomainAgeResult, DomainAgeStatus, ForensicContext, FragmentKind, ReputationResult,
};

/// Merge probe outputs into one context, in fixed order: domain age,
/// reputation, keyword alert. Absent sources add nothing.
pub fn aggregate(
    domain_age: Option<&DomainAgeResult>,
    reputation: Option<(&str, &ReputationResult)>,
    keyword_hits: &IndexSet<String>,
) -> ForensicContext {
    let mut context = ForensicContext::new();

    if let Some(domain_age) = domain_age {
        match domain_age.age_days {
            None => context.push(
                FragmentKind::DomainUnverified,
                format!(
                    "⚠️ **Warning:** Could not verify domain age ({}).\n",
                    unverified_reason(domain_age.status)
                ),
            ),
            Some(age) if age < NEW_DOMAIN_THRESHOLD_DAYS => context.push(
                FragmentKind::DomainCritical,
                format!(
                    "🚨 **CRITICAL:** Domain is VERY NEW ({} days old). \
                     Real companies usually have older domains.\n",
                    age
                ),
            ),
            Some(age) => context.push(
                FragmentKind::DomainTrust,
                format!(
                    "✅ **Domain Trust:** Domain is {} days old (Created {}).\n",
                    age, domain_age.registration_date_display
                ),
            ),
        }
    }

    if let Some((company, result)) = reputation {
        context.push(
            FragmentKind::Reputation,
            format!(
                "\n🌍 **Reputation Check for '{}':**\n{}\n",
                company,
                result.render()
            ),
        );
    }

    if !keyword_hits.is_empty() {
        let terms = keyword_hits
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
            .to_uppercase();
        context.push(
            FragmentKind::KeywordAlert,
            format!(
                "\n🚩 **Keyword Alert:** Found suspicious terms: {}. These are common in scams.",
                terms
            ),
        );
    }

    context
}

fn unverified_reason(status: DomainAgeStatus) -> &'static str {
    match status {
        DomainAgeStatus::InvalidUrl => "URL could not be parsed into a domain",
        DomainAgeStatus::Unknown => "WHOIS record has no creation date",
        // Known never reaches here; age_days is always set for it.
        DomainAgeStatus::HiddenOrError | DomainAgeStatus::Known => {
            "WHOIS lookup failed or timed out"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReputationHit;
    use chrono::{TimeZone, Utc};

    fn aged(days: i64) -> DomainAgeResult {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        DomainAgeResult::known("acme.com", created, days)
    }

    fn no_hits() -> IndexSet<String> {
        IndexSet::new()
    }

    #[test]
    fn test_young_domain_is_critical() {
        let context = aggregate(Some(&aged(30)), None, &no_hits());
        let text = context.render();
        assert!(text.contains("CRITICAL"));
        assert!(text.contains("(30 days old)"));
        assert!(!text.contains("Domain Trust"));
    }

    #[test]
    fn test_old_domain_is_trusted() {
        let context = aggregate(Some(&aged(400)), None, &no_hits());
        let text = context.render();
        assert!(text.contains("Domain Trust"));
        assert!(text.contains("400 days old (Created 2024-05-01)"));
        assert!(!text.contains("CRITICAL"));
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(aggregate(Some(&aged(179)), None, &no_hits()).contains(FragmentKind::DomainCritical));
        assert!(aggregate(Some(&aged(180)), None, &no_hits()).contains(FragmentKind::DomainTrust));
    }

    #[test]
    fn test_unknown_age_is_unverified_not_critical() {
        for result in [
            DomainAgeResult::hidden_or_error("acme.com"),
            DomainAgeResult::unknown("acme.com"),
            DomainAgeResult::invalid_url(),
        ] {
            let context = aggregate(Some(&result), None, &no_hits());
            let text = context.render();
            assert!(text.contains("Could not verify domain age"));
            assert!(!text.contains("CRITICAL"));
            assert!(!text.contains("Domain Trust"));
        }
    }

    #[test]
    fn test_reputation_fragment_labels_company() {
        let result = ReputationResult::Found(vec![ReputationHit::new(
            "Acme asked me for a deposit",
            "https://forum.example/t/1",
            "They wanted $300",
        )]);
        let text = aggregate(None, Some(("Acme", &result)), &no_hits()).render();
        assert_eq!(
            text,
            "\n🌍 **Reputation Check for 'Acme':**\n\
             - [Acme asked me for a deposit](https://forum.example/t/1): They wanted $300\n"
        );
    }

    #[test]
    fn test_reputation_sentinels_render_distinct_text() {
        let none = aggregate(None, Some(("Acme", &ReputationResult::NoReports)), &no_hits());
        let down = aggregate(None, Some(("Acme", &ReputationResult::Unavailable)), &no_hits());
        assert!(none.render().contains("No specific scam reports found."));
        assert!(down.render().contains("Could not verify company reputation"));
    }

    #[test]
    fn test_keyword_alert_upper_cases_hits() {
        let hits: IndexSet<String> = ["wire transfer", "kindly"].into_iter().map(String::from).collect();
        let text = aggregate(None, None, &hits).render();
        assert_eq!(
            text,
            "\n🚩 **Keyword Alert:** Found suspicious terms: WIRE TRANSFER, KINDLY. These are common in scams."
        );
    }

    #[test]
    fn test_fragment_order_is_fixed() {
        let hits: IndexSet<String> = ["telegram"].into_iter().map(String::from).collect();
        let context = aggregate(
            Some(&aged(5)),
            Some(("Acme", &ReputationResult::NoReports)),
            &hits,
        );
        let kinds: Vec<_> = context.fragments().iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![FragmentKind::DomainCritical, FragmentKind::Reputation, FragmentKind::KeywordAlert]
        );
    }

    #[test]
    fn test_no_evidence_is_empty() {
        assert!(aggregate(None, None, &no_hits()).is_empty());
    }
}
