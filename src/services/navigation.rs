//! Address-bar input resolution.
//!
//! Classifies raw input as either a URL or a search query and produces the
//! URL to load. Pure functions, no I/O.

use crate::types::settings::SearchEngine;

/// Resolve address-bar input into a loadable URL.
///
/// Returns `None` for blank input. Inputs with an explicit `http(s)://`
/// scheme pass through unchanged; bare-domain-looking inputs get `https://`
/// prepended; everything else becomes a search on `engine`.
pub fn resolve(input: &str, engine: SearchEngine) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if has_scheme(trimmed) {
        return Some(trimmed.to_string());
    }
    if looks_like_domain(trimmed) {
        return Some(format!("https://{}", trimmed));
    }
    Some(format!("{}{}", engine.search_prefix(), percent_encode(trimmed)))
}

/// True when the input starts with `http://` or `https://`, case-insensitive.
fn has_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// True when the input opens with one or more word characters or hyphens
/// immediately followed by a dot, e.g. `example.com` or `my-site.org/path`.
fn looks_like_domain(input: &str) -> bool {
    let mut chars = input.chars();
    let mut label_len = 0;
    for c in chars.by_ref() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            label_len += 1;
        } else if c == '.' {
            return label_len > 0;
        } else {
            return false;
        }
    }
    false
}

/// Percent-encode a query for a search URL. Unreserved characters pass
/// through, everything else (including space) is `%XX`-escaped.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                out.push(char::from(b"0123456789ABCDEF"[(b >> 4) as usize]));
                out.push(char::from(b"0123456789ABCDEF"[(b & 0xf) as usize]));
            }
        }
    }
    out
}
