//! Uploaded documents to plain text.
//!
//! Offer letters arrive as `.txt`/`.md` or as PDFs. PDF support needs the
//! `pdf` feature; without it a PDF path is rejected as unsupported.

mod text;
#[cfg(feature = "pdf")]
mod pdf;

pub use text::PlainTextExtractor;
#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

use std::path::Path;
use tracing::debug;

use crate::error::{DocumentError, DocumentResult};
use crate::traits::DocumentExtractor;

/// Pick an extractor from the file extension.
///
/// `.pdf` (any case) goes to the PDF extractor; everything else is read as
/// text.
pub fn extractor_for_path(path: &Path) -> DocumentResult<Box<dyn DocumentExtractor>> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        pdf_extractor()
    } else {
        Ok(Box::new(PlainTextExtractor))
    }
}

#[cfg(feature = "pdf")]
fn pdf_extractor() -> DocumentResult<Box<dyn DocumentExtractor>> {
    Ok(Box::new(PdfExtractor))
}

#[cfg(not(feature = "pdf"))]
fn pdf_extractor() -> DocumentResult<Box<dyn DocumentExtractor>> {
    Err(DocumentError::Unsupported(
        "PDF (rebuild with the `pdf` feature)".to_string(),
    ))
}

/// Read a document from disk and extract its text.
///
/// A document that yields no text is `DocumentError::Empty`.
pub fn read_document(path: &Path) -> DocumentResult<String> {
    let extractor = extractor_for_path(path)?;
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Extracting document text");

    extractor.extract(&bytes)?.ok_or(DocumentError::Empty)
}
