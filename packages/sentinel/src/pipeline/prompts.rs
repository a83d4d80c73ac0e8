//! Verdict prompt.
//!
//! The output directive is load-bearing: [`parse_verdict`](super::parse_verdict)
//! reads the first response line and expects one of the three verdict
//! literals on it.

/// Persona and mission.
pub const VERDICT_PREAMBLE: &str = r#"You are 'Sentinel', a Senior Cybersecurity Analyst for a University.

MISSION: Analyze this student internship/job lead to detect fraud."#;

/// Analysis instructions and the strict output contract.
pub const VERDICT_INSTRUCTIONS: &str = r#"--- INSTRUCTIONS ---
1. **KNOWLEDGE OVERRIDE:** If the input is a widely known, legitimate company (e.g., Google, Microsoft, Amazon) and the URL is correct, declare it **SAFE** immediately, even if the "Forensic Evidence" says WHOIS failed.
2. **ANALYZE:** Check for red flags (urgency, bad grammar, too good to be true, "kindly", "wire transfer", gmail/yahoo addresses for businesses, upfront fees).
3. **VERIFY:** Weigh the Forensic Evidence. A failed or unavailable lookup is not evidence either way.
4. **VERDICT:** Determine the risk level.

--- OUTPUT FORMAT ---
You must start your response with EXACTLY one of these three lines:
VERDICT: SAFE
VERDICT: CAUTION
VERDICT: SCAM

(Leave one empty line)

## 🛡️ Analysis Report
**Confidence:** [High/Medium/Low]

### 📝 Summary
[1-2 sentences explaining the verdict clearly]

### 🚩 Red Flags (If any):
* [Point 1]

### 🎓 Recommendation:
[Actionable advice]"#;

/// Build the completion prompt.
///
/// Input text and context are inserted verbatim in a single pass, so braces
/// or section markers inside user text are never expanded.
pub fn build_verdict_prompt(input_text: &str, forensic_context: &str) -> String {
    format!(
        "{VERDICT_PREAMBLE}\n\n\
         --- INPUT DATA ---\n\
         {input_text}\n\n\
         --- FORENSIC EVIDENCE (FACTS) ---\n\
         {forensic_context}\n\n\
         {VERDICT_INSTRUCTIONS}\n"
    )
}
