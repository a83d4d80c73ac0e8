use crate::error::DocumentResult;
use crate::traits::DocumentExtractor;

/// Reads bytes as UTF-8, replacing invalid sequences.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl DocumentExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> DocumentResult<Option<String>> {
        let text = String::from_utf8_lossy(bytes);
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text.into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let text = PlainTextExtractor.extract("Stipend: ₹10,000".as_bytes()).unwrap();
        assert_eq!(text.as_deref(), Some("Stipend: ₹10,000"));
    }

    #[test]
    fn test_invalid_bytes_replaced() {
        let text = PlainTextExtractor.extract(&[b'o', b'k', 0xFF]).unwrap().unwrap();
        assert!(text.starts_with("ok"));
    }

    #[test]
    fn test_whitespace_only_is_none() {
        assert_eq!(PlainTextExtractor.extract(b" \t\n").unwrap(), None);
    }
}
