//! Evidence probes.
//!
//! Each probe turns its own failures into an evidence sentinel; none of them
//! can abort a run.

pub mod domain_age;
pub mod keywords;
pub mod reputation;

pub use domain_age::{extract_host, normalize_url, DomainAgeProber};
pub use keywords::scan;
pub use reputation::{reputation_query, ReputationProber};
