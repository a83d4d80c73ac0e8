use tracing::warn;

use crate::error::DocumentResult;
use crate::traits::DocumentExtractor;

/// Extracts the text layer of every page of a PDF.
///
/// Scanned PDFs without a text layer, and files lopdf cannot parse, come
/// back as `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl DocumentExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> DocumentResult<Option<String>> {
        let doc = match lopdf::Document::load_mem(bytes) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "lopdf failed to parse the document");
                return Ok(None);
            }
        };

        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        let text = match doc.extract_text(&pages) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, pages = pages.len(), "PDF text extraction failed");
                return Ok(None);
            }
        };

        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_yield_no_text() {
        assert_eq!(PdfExtractor.extract(b"definitely not a pdf").unwrap(), None);
    }
}
