//! Context analysis for keyword occurrences
//!
//! A keyword only counts as positive evidence when it is used plainly. These
//! checks look at a short window of text before each occurrence for negation
//! ("this is not a product") or discussion ("compared to other products").

use regex::Regex;

use crate::signals::{COMPARISON_PATTERNS, COMPARISON_WINDOW, NEGATION_PATTERNS, NEGATION_WINDOW};

/// True if any occurrence of `keyword` is preceded by a negation cue
pub fn is_negated(content: &str, keyword: &str) -> bool {
    any_window_matches(content, keyword, NEGATION_WINDOW, &NEGATION_PATTERNS)
}

/// True if any occurrence of `keyword` sits inside a comparison or discussion
pub fn is_in_comparison_context(content: &str, keyword: &str) -> bool {
    any_window_matches(content, keyword, COMPARISON_WINDOW, &COMPARISON_PATTERNS)
}

fn any_window_matches(content: &str, keyword: &str, window: usize, patterns: &[Regex]) -> bool {
    if keyword.is_empty() {
        return false;
    }

    // ASCII lowercasing keeps byte offsets aligned with `content`
    let haystack = content.to_ascii_lowercase();
    let needle = keyword.to_ascii_lowercase();

    haystack.match_indices(&needle).any(|(idx, _)| {
        let preceding = preceding_window(content, idx, window);
        patterns.iter().any(|re| re.is_match(preceding))
    })
}

/// Up to `window` characters of `content` ending at byte offset `end`
fn preceding_window(content: &str, end: usize, window: usize) -> &str {
    if window == 0 {
        return "";
    }
    let before = &content[..end];
    let start = before.char_indices().rev().nth(window - 1).map_or(0, |(i, _)| i);
    &before[start..]
}
