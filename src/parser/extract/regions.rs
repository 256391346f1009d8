use std::sync::LazyLock;

use regex::Regex;

// Block-strategy region extractors. The table strategy gets RAM and storage
// from dedicated cells; with unknown card markup we settle for the first
// plausible substring of the flattened text instead.

static RAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*GB(?:\s+DDR\d\w*)?\s+(?:ECC\s+)?(?:RAM|Memory)").unwrap()
});
static STORAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\d+\s*x\s*)?\d+(?:\.\d+)?\s*(?:GB|TB)\s+(?:NVMe|SSD|HDD|SATA)(?:\s+(?:SSD|HDD|Drive))?")
        .unwrap()
});

pub fn ram_span(text: &str) -> String {
    RAM_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub fn storage_span(text: &str) -> String {
    STORAGE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
