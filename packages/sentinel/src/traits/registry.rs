//! Domain registration lookup (WHOIS, RDAP, registry APIs).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::LookupResult;

/// Looks up registration metadata for a bare hostname.
///
/// Registries are inconsistent: some report one creation date, some several
/// (one per registrar record), some none. Implementations return whatever
/// the registry reports, in registry order, and leave picking one to the
/// caller.
#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    /// Creation timestamps recorded for `host`.
    ///
    /// An empty vector means the lookup worked but carried no date.
    /// Errors cover network failures, throttling, missing records, and
    /// privacy-protected domains.
    async fn creation_dates(&self, host: &str) -> LookupResult<Vec<DateTime<Utc>>>;
}
