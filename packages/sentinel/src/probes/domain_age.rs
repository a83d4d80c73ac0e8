//! Domain registration-age probe.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{LookupError, LookupResult};
use crate::traits::RegistrationLookup;
use crate::types::DomainAgeResult;

// Host must end at the end of input or at a port, path, query or fragment.
static RE_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?([\w-]+(?:\.[\w-]+)+)(?:[:/?#]|$)").unwrap()
});

/// Prepend `https://` when the input carries no http(s) scheme.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Extract the bare, lower-cased host (without a leading `www.`) from a URL
/// or domain string.
pub fn extract_host(input: &str) -> Option<String> {
    let normalized = normalize_url(input);
    RE_HOST
        .captures(&normalized)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Lookup names for a host, most specific first: the host itself, then each
/// parent that still has at least two labels.
///
/// `careers.acme.co.uk` yields `careers.acme.co.uk`, `acme.co.uk`, `co.uk`.
pub fn registrable_candidates(host: &str) -> Vec<&str> {
    let mut candidates = vec![host];
    let mut rest = host;
    while let Some((_, parent)) = rest.split_once('.') {
        if !parent.contains('.') {
            break;
        }
        candidates.push(parent);
        rest = parent;
    }
    candidates
}

/// Looks up how long ago a domain was registered.
///
/// Never fails: malformed input, empty registry answers, and lookup errors
/// each come back as their own unknown state with `age_days = None`.
pub struct DomainAgeProber<'a> {
    lookup: &'a dyn RegistrationLookup,
    timeout: Duration,
}

impl<'a> DomainAgeProber<'a> {
    pub fn new(lookup: &'a dyn RegistrationLookup, timeout: Duration) -> Self {
        Self { lookup, timeout }
    }

    pub async fn probe(&self, url_or_domain: &str) -> DomainAgeResult {
        self.probe_at(url_or_domain, Utc::now()).await
    }

    /// Probe with an explicit "now", for reproducible ages.
    pub async fn probe_at(&self, url_or_domain: &str, now: DateTime<Utc>) -> DomainAgeResult {
        let Some(host) = extract_host(url_or_domain) else {
            debug!(input = url_or_domain, "Could not extract a host from input");
            return DomainAgeResult::invalid_url();
        };

        let lookup = match tokio::time::timeout(self.timeout, self.lookup_registered(&host)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout(self.timeout)),
        };

        match lookup {
            Ok(dates) => match dates.into_iter().next() {
                Some(created) => {
                    let age_days = (now - created).num_days();
                    info!(host = %host, age_days, "Domain age resolved");
                    DomainAgeResult::known(host, created, age_days)
                }
                None => {
                    info!(host = %host, "Registry returned no creation date");
                    DomainAgeResult::unknown(host)
                }
            },
            Err(e) => {
                warn!(host = %host, error = %e, "Registration lookup failed");
                DomainAgeResult::hidden_or_error(host)
            }
        }
    }

    // Registries only hold registered domains; a careers subdomain is
    // NotFound until we reach its parent.
    async fn lookup_registered(&self, host: &str) -> LookupResult<Vec<DateTime<Utc>>> {
        let mut last_error = None;
        for candidate in registrable_candidates(host) {
            match self.lookup.creation_dates(candidate).await {
                Err(e @ LookupError::NotFound { .. }) => {
                    debug!(host = candidate, "Not registered, trying parent domain");
                    last_error = Some(e);
                }
                other => return other,
            }
        }
        Err(last_error.unwrap_or_else(|| LookupError::NotFound {
            host: host.to_string(),
        }))
    }
}
