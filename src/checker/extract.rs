// src/checker/extract.rs
// =============================================================================
// This module pulls URLs out of plain text and removes repeats.
//
// Only absolute http:// and https:// URLs are recognised. Relative links,
// bare domains ("example.com") and other schemes (ftp://, mailto:) never
// match, because the regex itself refuses them. There is no second
// validation pass.
//
// Rust concepts:
// - LazyLock: compile the regex once, on first use, then share it
// - Iterators: captures_iter() walks matches in the order they appear
// - HashSet: O(1) "have we seen this already?" checks
// =============================================================================

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// The strict URL grammar, one piece per line:
//   scheme     http:// or https://, case-insensitive, starting on a word boundary
//   userinfo   optional user:password@
//   host       dot-separated labels (letters in any script, digits, _ and -),
//              or a bracketed IPv6 literal
//   port       optional :1234
//   rest       optional path/query/fragment starting with / ? or #, which
//              may not end in sentence punctuation or a closing bracket
//   end        end of text, whitespace, punctuation or a quote/bracket
//
// The URL itself is capture group 1. The end piece is what stops a URL from
// being cut short: "http://user" out of "http://user:pw@host", or "http://b"
// out of "http://bücher.de", can't match because the next character is not
// an end character.
static STRICT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(https?://",
        r"(?:[\w.~%!$&*+,;=:-]+@)?",
        r"(?:\[[0-9a-f:.]+\]|",
        r"(?:[\p{L}\p{N}](?:[\p{L}\p{N}_-]*[\p{L}\p{N}])?\.)*",
        r"[\p{L}\p{N}](?:[\p{L}\p{N}_-]*[\p{L}\p{N}])?)",
        r"(?::[0-9]{1,5})?",
        r#"(?:[/?#](?:[^\s<>"'`]*[^\s<>"'`.,;:!?)\]}])?)?)"#,
        r#"(?:$|[\s<>"'`.,;:!?)\]}])"#,
    ))
    .expect("URL pattern is a valid regex")
});

// Returns every http/https URL in `text`, in the order they appear
//
// Example:
//   "visit http://a.com and ftp://c.com" -> ["http://a.com"]
pub fn extract_urls(text: &str) -> Vec<String> {
    STRICT_URL
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

// Keeps the first occurrence of each URL and drops the rest
//
// Comparison is exact string equality: "http://a.com" and "http://a.com/"
// are two different URLs here.
pub fn dedup_urls(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(urls.len());
    let mut unique = Vec::with_capacity(urls.len());

    for url in urls {
        // insert() returns false when the value was already present
        if seen.insert(url.clone()) {
            unique.push(url);
        }
    }

    unique
}
