//! RDAP registration lookup.
//!
//! RDAP is the JSON successor to WHOIS. `rdap.org` redirects each query to
//! the authoritative registry for the TLD; reqwest follows the redirect.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{LookupError, LookupResult};
use crate::traits::RegistrationLookup;

/// Default RDAP bootstrap service.
pub const DEFAULT_RDAP_BASE_URL: &str = "https://rdap.org";

/// RDAP domain object (only the fields we read).
#[derive(Debug, Deserialize)]
pub(crate) struct RdapDomain {
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    action: String,
    #[serde(rename = "eventDate")]
    date: Option<String>,
}

impl RdapDomain {
    /// Dates of every `registration` event, in response order.
    pub(crate) fn registration_dates(&self) -> Vec<DateTime<Utc>> {
        self.events
            .iter()
            .filter(|event| event.action.eq_ignore_ascii_case("registration"))
            .filter_map(|event| event.date.as_deref())
            .filter_map(|date| match DateTime::parse_from_rfc3339(date) {
                Ok(parsed) => Some(parsed.with_timezone(&Utc)),
                Err(e) => {
                    debug!(date, error = %e, "Skipping unparseable RDAP event date");
                    None
                }
            })
            .collect()
    }
}

/// Registration lookup over RDAP.
pub struct RdapLookup {
    client: reqwest::Client,
    base_url: String,
}

impl RdapLookup {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: super::http_client(timeout),
            base_url: DEFAULT_RDAP_BASE_URL.to_string(),
        }
    }

    /// Use a specific RDAP server instead of the bootstrap redirector.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RegistrationLookup for RdapLookup {
    async fn creation_dates(&self, host: &str) -> LookupResult<Vec<DateTime<Utc>>> {
        let url = format!("{}/domain/{}", self.base_url, host);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/rdap+json")
            .send()
            .await
            .map_err(|e| LookupError::Http(Box::new(e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound {
                host: host.to_string(),
            });
        }
        if !status.is_success() {
            return Err(LookupError::Status {
                host: host.to_string(),
                status: status.as_u16(),
            });
        }

        let domain: RdapDomain = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        let dates = domain.registration_dates();
        debug!(host, dates = dates.len(), "RDAP lookup complete");
        Ok(dates)
    }
}
