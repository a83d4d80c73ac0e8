//! Verdict parsing.
//!
//! The model is asked to open with `VERDICT: SAFE|CAUTION|SCAM`. Models do
//! not always comply, so parsing never fails: anything unrecognised becomes
//! [`Verdict::Unknown`] and the report body is still returned.

use crate::config::VerdictParseMode;
use crate::types::{Confidence, Verdict, VerdictReport};

/// Parse a completion response into a verdict report.
pub fn parse_verdict(response: &str, mode: VerdictParseMode) -> VerdictReport {
    let mut lines = response.lines();
    let first_line = lines.next().unwrap_or("").trim();
    let verdict_line = first_line.to_uppercase();

    let verdict = match mode {
        VerdictParseMode::Lenient => classify_lenient(&verdict_line),
        VerdictParseMode::Strict => classify_strict(&verdict_line),
    };

    let body = lines
        .skip_while(|line| line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string();

    let diagnostic = (verdict == Verdict::Unknown).then(|| first_line.to_string());

    VerdictReport {
        verdict,
        confidence: parse_confidence(&body),
        body,
        diagnostic,
    }
}

// Order matters: a line mentioning both SAFE and SCAM reads as SAFE.
fn classify_lenient(verdict_line: &str) -> Verdict {
    if verdict_line.contains("SAFE") {
        Verdict::Safe
    } else if verdict_line.contains("SCAM") {
        Verdict::Scam
    } else if verdict_line.contains("CAUTION") {
        Verdict::Caution
    } else {
        Verdict::Unknown
    }
}

fn classify_strict(verdict_line: &str) -> Verdict {
    [Verdict::Safe, Verdict::Caution, Verdict::Scam]
        .into_iter()
        .find(|v| v.literal() == Some(verdict_line))
        .unwrap_or(Verdict::Unknown)
}

fn parse_confidence(body: &str) -> Confidence {
    let Some(line) = body
        .lines()
        .map(str::to_uppercase)
        .find(|line| line.contains("CONFIDENCE:"))
    else {
        return Confidence::Unspecified;
    };

    let value = line
        .split_once("CONFIDENCE:")
        .map(|(_, value)| value)
        .unwrap_or("");
    if value.contains("HIGH") {
        Confidence::High
    } else if value.contains("MEDIUM") {
        Confidence::Medium
    } else if value.contains("LOW") {
        Confidence::Low
    } else {
        Confidence::Unspecified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(response: &str) -> VerdictReport {
        parse_verdict(response, VerdictParseMode::Lenient)
    }

    #[test]
    fn test_scam_verdict_and_body() {
        let report = lenient("VERDICT: SCAM\n\nBody text");
        assert_eq!(report.verdict, Verdict::Scam);
        assert_eq!(report.body, "Body text");
        assert_eq!(report.diagnostic, None);
    }

    #[test]
    fn test_unrecognised_first_line() {
        let report = lenient("Some unexpected text\nmore");
        assert_eq!(report.verdict, Verdict::Unknown);
        assert_eq!(report.diagnostic.as_deref(), Some("Some unexpected text"));
        assert_eq!(report.body, "more");
    }

    #[test]
    fn test_empty_response() {
        let report = lenient("");
        assert_eq!(report.verdict, Verdict::Unknown);
        assert_eq!(report.body, "");
        assert_eq!(report.confidence, Confidence::Unspecified);
    }

    #[test]
    fn test_single_line_response_has_empty_body() {
        let report = lenient("VERDICT: CAUTION");
        assert_eq!(report.verdict, Verdict::Caution);
        assert_eq!(report.body, "");
    }

    #[test]
    fn test_first_line_is_trimmed_and_case_folded() {
        assert_eq!(lenient("  verdict: safe  \n\nok").verdict, Verdict::Safe);
        assert_eq!(lenient("**VERDICT: SCAM**\r\n\r\nbody").verdict, Verdict::Scam);
    }

    #[test]
    fn test_lenient_prefers_safe_when_both_mentioned() {
        assert_eq!(lenient("SAFE, not a SCAM").verdict, Verdict::Safe);
    }

    #[test]
    fn test_strict_requires_exact_literal() {
        let strict = |r: &str| parse_verdict(r, VerdictParseMode::Strict);
        assert_eq!(strict("VERDICT: SAFE\n\nok").verdict, Verdict::Safe);
        assert_eq!(strict("verdict: caution").verdict, Verdict::Caution);
        assert_eq!(strict("VERDICT: SAFE, not a SCAM").verdict, Verdict::Unknown);
        assert_eq!(strict("**VERDICT: SCAM**").verdict, Verdict::Unknown);
    }

    #[test]
    fn test_confidence_extracted_from_report() {
        let response = "VERDICT: SCAM\n\n## 🛡️ Analysis Report\n**Confidence:** High\n\n### 📝 Summary\nLow effort phishing.";
        let report = lenient(response);
        assert_eq!(report.confidence, Confidence::High);
        assert!(report.body.starts_with("## 🛡️ Analysis Report"));
    }

    #[test]
    fn test_confidence_missing_is_unspecified() {
        assert_eq!(lenient("VERDICT: SAFE\n\nLooks fine.").confidence, Confidence::Unspecified);
        assert_eq!(lenient("VERDICT: SAFE\n\nConfidence: ???").confidence, Confidence::Unspecified);
    }

    #[test]
    fn test_body_keeps_internal_blank_lines() {
        let report = lenient("VERDICT: CAUTION\n\nline one\n\nline two\n\n");
        assert_eq!(report.body, "line one\n\nline two");
    }
}
