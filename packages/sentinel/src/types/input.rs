//! Analysis input: exactly one active source per run.

use serde::{Deserialize, Serialize};

/// The offer being analyzed.
///
/// Mirrors the three ways a student can hand over a lead: an uploaded
/// document (already reduced to plain text), a company URL, or details typed
/// in by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AnalysisInput {
    /// Text extracted from an uploaded offer letter or contract.
    Document { text: String },

    /// A career page or company home page.
    Url { url: String },

    /// Manually entered details. Any subset may be present.
    Manual {
        company_name: Option<String>,
        recruiter_email: Option<String>,
        message: Option<String>,
    },
}

impl AnalysisInput {
    pub fn document(text: impl Into<String>) -> Self {
        Self::Document { text: text.into() }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    pub fn manual(
        company_name: Option<String>,
        recruiter_email: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self::Manual {
            company_name,
            recruiter_email,
            message,
        }
    }

    /// The single text block handed to the model and the keyword scanner.
    pub fn input_text(&self) -> String {
        match self {
            Self::Document { text } => text.clone(),
            Self::Url { url } => {
                let url = url.trim();
                if url.is_empty() {
                    String::new()
                } else {
                    format!("URL to Analyze: {}", url)
                }
            }
            Self::Manual {
                company_name,
                recruiter_email,
                message,
            } => {
                let mut parts = Vec::with_capacity(3);
                if let Some(name) = non_blank(company_name) {
                    parts.push(format!("Company: {}", name));
                }
                if let Some(email) = non_blank(recruiter_email) {
                    parts.push(format!("Email: {}", email));
                }
                if let Some(message) = non_blank(message) {
                    parts.push(format!("Message: {}", message));
                }
                parts.join("\n")
            }
        }
    }

    /// URL to probe for domain age, if this is a URL run.
    pub fn probe_url(&self) -> Option<&str> {
        match self {
            Self::Url { url } if !url.trim().is_empty() => Some(url.trim()),
            _ => None,
        }
    }

    /// Company name to check for reputation, if one was entered.
    pub fn company_name(&self) -> Option<&str> {
        match self {
            Self::Manual { company_name, .. } => non_blank(company_name),
            _ => None,
        }
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_input_text() {
        let input = AnalysisInput::url("https://example.com/careers");
        assert_eq!(input.input_text(), "URL to Analyze: https://example.com/careers");
        assert_eq!(input.probe_url(), Some("https://example.com/careers"));
        assert_eq!(input.company_name(), None);
    }

    #[test]
    fn test_manual_input_joins_present_fields_in_order() {
        let input = AnalysisInput::manual(
            Some("Acme Corp".into()),
            None,
            Some("Kindly pay the training fee".into()),
        );
        assert_eq!(
            input.input_text(),
            "Company: Acme Corp\nMessage: Kindly pay the training fee"
        );
        assert_eq!(input.company_name(), Some("Acme Corp"));
        assert_eq!(input.probe_url(), None);
    }

    #[test]
    fn test_blank_manual_fields_are_skipped() {
        let input = AnalysisInput::manual(Some("  ".into()), Some(String::new()), None);
        assert_eq!(input.input_text(), "");
        assert_eq!(input.company_name(), None);
    }

    #[test]
    fn test_document_text_is_verbatim() {
        let input = AnalysisInput::document("Offer Letter\n\nDear Student,");
        assert_eq!(input.input_text(), "Offer Letter\n\nDear Student,");
    }

    #[test]
    fn test_blank_url_produces_no_text() {
        let input = AnalysisInput::url("   ");
        assert_eq!(input.input_text(), "");
        assert_eq!(input.probe_url(), None);
    }
}
