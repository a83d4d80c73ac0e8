//! Data types shared across probes, pipeline, and providers.

pub mod analysis;
pub mod context;
pub mod evidence;
pub mod input;
pub mod verdict;

pub use analysis::{Analysis, Evidence, ReputationEvidence};
pub use context::{EvidenceFragment, ForensicContext, FragmentKind};
pub use evidence::{DomainAgeResult, DomainAgeStatus, ReputationHit, ReputationResult};
pub use input::AnalysisInput;
pub use verdict::{Confidence, Verdict, VerdictReport};
