use std::sync::LazyLock;

use regex::Regex;

use crate::model::Processor;

static GHZ_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s*Ghz").unwrap());
static CORES_THREADS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+Cores?\s*/\s*(\d+)\s+threads?").unwrap());
static CORES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+Cores?").unwrap());

/// Parse a processor cell: first line is the model name, the rest is scanned
/// for clock speed and core/thread counts.
pub fn parse(text: &str) -> Processor {
    let mut processor = Processor::default();

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if let Some(first) = lines.first() {
        processor.name = (*first).to_string();
    }
    let full_text = lines.join(" ");

    if let Some(caps) = GHZ_RE.captures(&full_text) {
        processor.speed = format!("{}GHz", &caps[1]);
    }

    // Combined "N Cores / M threads" wins over the cores-only fallback;
    // threads stays empty when only cores matched.
    if let Some(caps) = CORES_THREADS_RE.captures(&full_text) {
        processor.cores = caps[1].to_string();
        processor.threads = caps[2].to_string();
    } else if let Some(caps) = CORES_RE.captures(&full_text) {
        processor.cores = caps[1].to_string();
    }

    processor
}
