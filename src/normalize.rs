use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

// Pre-compiled regexes for markup stripping (compile once, use many times)
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex pattern")
});

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>").expect("Invalid HTML tag regex pattern")
});

static MD_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!?\[([^\]]*)\]\([^)]*\)").expect("Invalid markdown link regex pattern")
});

static MD_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[#*_`>~|]+").expect("Invalid markdown marker regex pattern")
});

/// Collapse runs of whitespace into single spaces
pub fn collapse_whitespace(content: &str) -> String {
    WHITESPACE_RE.replace_all(content, " ").trim().to_string()
}

/// Remove HTML tags, keeping their text
pub fn strip_tags(content: &str) -> String {
    HTML_TAG_RE.replace_all(content, " ").to_string()
}

/// Strip HTML tags and markdown markers, keeping readable text
pub fn strip_markup(content: &str) -> String {
    let result = strip_tags(content);
    let result = MD_LINK_RE.replace_all(&result, "$1");
    let result = MD_MARKER_RE.replace_all(&result, " ");
    collapse_whitespace(&result)
}

/// First `max_chars` characters of `content`
pub fn truncate_chars(content: &str, max_chars: usize) -> String {
    content.chars().take(max_chars).collect()
}

/// SHA-256 of content, hex encoded.
///
/// Callers that memoize schema generation key their cache on this.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        let input = "Hello   World\n\n\nTest ";
        assert_eq!(collapse_whitespace(input), "Hello World Test");
    }

    #[test]
    fn test_strip_markup() {
        let input = "# Title\n\n**Bold** and _soft_ text with a [link](https://x.y) <b>tag</b>";
        assert_eq!(strip_markup(input), "Title Bold and soft text with a link tag");
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_content_hash() {
        let hash1 = content_hash("Hello World");
        let hash2 = content_hash("Hello World");
        let hash3 = content_hash("Hello World!");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
        assert_eq!(hash1.len(), 64); // SHA-256 produces 64 hex chars
    }
}
