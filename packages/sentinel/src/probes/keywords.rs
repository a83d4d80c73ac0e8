//! Keyword scanner.
//!
//! Matching is case-insensitive substring containment, not word matching:
//! "kindly" also fires inside "unkindly". That is the documented policy.

use indexmap::IndexSet;

use crate::config::ScamKeywordList;

/// Return the phrases from `keywords` that occur in `text`, in list order.
pub fn scan(text: &str, keywords: &ScamKeywordList) -> IndexSet<String> {
    if text.is_empty() {
        return IndexSet::new();
    }

    let haystack = text.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .map(str::to_string)
        .collect()
}
