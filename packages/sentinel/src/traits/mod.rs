//! Trait seams for the three network collaborators and document extraction.
//!
//! The pipeline depends only on these traits. Concrete providers live in
//! [`crate::providers`], mocks in [`crate::testing`].

pub mod ai;
pub mod document;
pub mod registry;
pub mod searcher;

pub use ai::CompletionService;
pub use document::DocumentExtractor;
pub use registry::RegistrationLookup;
pub use searcher::{SearchHit, WebSearcher};
