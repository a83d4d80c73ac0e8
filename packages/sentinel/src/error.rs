//! Typed errors for the sentinel library.
//!
//! Each collaborator family gets its own error so probes can decide locally
//! how a failure degrades. Only [`SentinelError`] ever reaches the caller of
//! [`Sentinel::analyze`](crate::Sentinel::analyze).

use std::time::Duration;
use thiserror::Error;

/// Errors that abort an analysis run.
#[derive(Debug, Error)]
pub enum SentinelError {
    /// No input text was supplied (no document text, URL, or manual fields)
    #[error("no input provided: supply a document, a URL, or manual details")]
    EmptyInput,

    /// The completion service failed; without a response there is no verdict
    #[error("completion service failed: {0}")]
    Completion(#[from] CompletionError),
}

/// Errors from a domain registration lookup (WHOIS / RDAP).
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP request failed (connection refused, DNS, TLS)
    #[error("registration lookup request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Registry answered with a non-success status
    #[error("registry returned status {status} for {host}")]
    Status { host: String, status: u16 },

    /// No registration record exists for the host
    #[error("no registration record for {host}")]
    NotFound { host: String },

    /// Registry response could not be decoded
    #[error("could not parse registry response: {0}")]
    Parse(String),

    /// Lookup exceeded its time budget
    #[error("registration lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors from a web search provider.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP request failed
    #[error("search request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Provider rejected the request (rate limit, bad key)
    #[error("search API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Provider response could not be decoded
    #[error("could not parse search response: {0}")]
    Parse(String),

    /// No search provider is configured
    #[error("web search is not configured")]
    NotConfigured,

    /// Search exceeded its time budget
    #[error("search timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors from the text-completion service.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Configuration error (missing API key, invalid settings)
    #[error("configuration error: {0}")]
    Config(String),

    /// Network error (connection failed)
    #[error("network error: {0}")]
    Network(String),

    /// API error (non-2xx response, quota, auth)
    #[error("API error: {0}")]
    Api(String),

    /// Response did not have the expected shape
    #[error("parse error: {0}")]
    Parse(String),

    /// Completion exceeded its time budget
    #[error("completion timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors while turning an uploaded document into text.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// File could not be read
    #[error("could not read document: {0}")]
    Io(#[from] std::io::Error),

    /// Document has no extractable text
    #[error("document contains no readable text")]
    Empty,

    /// Document format is not supported by this build
    #[error("unsupported document type: {0}")]
    Unsupported(String),
}

/// Result type alias for analysis runs.
pub type Result<T> = std::result::Result<T, SentinelError>;

/// Result type alias for registration lookups.
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Result type alias for web searches.
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Result type alias for completions.
pub type CompletionResult<T> = std::result::Result<T, CompletionError>;

/// Result type alias for document extraction.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_second_timeouts_keep_their_unit() {
        let lookup = LookupError::Timeout(Duration::from_millis(250));
        assert_eq!(lookup.to_string(), "registration lookup timed out after 250ms");

        let completion = CompletionError::Timeout(Duration::from_secs(30));
        assert_eq!(completion.to_string(), "completion timed out after 30s");
    }
}
