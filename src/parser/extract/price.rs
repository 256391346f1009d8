use std::sync::LazyLock;

use regex::Regex;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$(\d+(?:\.\d{2})?)\s*(?:/\s*month|/mo)?").unwrap());

/// Table-strategy convention: normalize any dollar amount to `$<amount>/month`.
pub fn normalized(text: &str) -> String {
    match PRICE_RE.captures(text) {
        Some(caps) => format!("${}/month", &caps[1]),
        None => String::new(),
    }
}

/// Block-strategy convention: keep the raw matched span untouched.
pub fn raw_span(text: &str) -> String {
    PRICE_RE
        .find(text)
        .map(|m| m.as_str().trim_end().to_string())
        .unwrap_or_default()
}
