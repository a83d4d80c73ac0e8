//! Uploaded-document text extraction.

use crate::error::DocumentResult;

/// Turns an uploaded document into plain text.
pub trait DocumentExtractor: Send + Sync {
    /// Extract text from raw document bytes.
    ///
    /// Returns `Ok(None)` when the document is readable but contains no text
    /// (blank page, scanned image).
    fn extract(&self, bytes: &[u8]) -> DocumentResult<Option<String>>;
}
