use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\r]+").unwrap());

/// Collapse raw text into clean, single-spaced, single-newline-separated form.
/// Idempotent: cleaning cleaned text changes nothing.
pub fn clean_str(raw: &str) -> String {
    let collapsed = SPACE_RUNS.replace_all(raw, " ");
    collapsed
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract cleaned text from an element, one line per text node.
pub fn clean_text(element: Option<ElementRef<'_>>) -> String {
    let Some(el) = element else {
        return String::new();
    };
    let joined = el
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    clean_str(&joined)
}

/// Flatten an element to a single space-separated line, for heuristic
/// whole-block matching where structure is unknown.
pub fn flat_text(el: ElementRef<'_>) -> String {
    let joined = el
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    clean_str(&joined)
}
