use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::{extract, text};
use crate::model::ServerRecord;

static CLASSED_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("[class]").unwrap());
static TR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, strong, b").unwrap());

/// Class-attribute substrings that suggest a product card.
const CARD_CLASS_HINTS: &[&str] = &["server", "product", "plan", "package", "card"];

/// Heuristic strategy for unknown markup: treat anything card-shaped (by class
/// name) plus every table row as a candidate, parse each against the whole
/// flattened text, and deduplicate by name. Strictly less precise than the
/// fixed-column strategy; that tradeoff is intentional.
pub fn extract_page(document: &Html, category: &str) -> Vec<ServerRecord> {
    let mut candidates: Vec<ElementRef> = Vec::new();

    for element in document.select(&CLASSED_SEL) {
        let Some(class) = element.value().attr("class") else {
            continue;
        };
        let class_lower = class.to_lowercase();
        if CARD_CLASS_HINTS.iter().any(|hint| class_lower.contains(hint)) {
            candidates.push(element);
        }
    }
    // Table rows overlap the class-based selection by design; duplicates are
    // filtered by the name-dedup pass below.
    candidates.extend(document.select(&TR_SEL));

    let mut seen_names: HashSet<String> = HashSet::new();
    let mut servers = Vec::new();
    for candidate in candidates {
        if let Some(server) = parse_block(candidate, category) {
            if seen_names.insert(server.processor.name.clone()) {
                servers.push(server);
            }
        }
    }
    servers
}

pub fn parse_block(element: ElementRef<'_>, category: &str) -> Option<ServerRecord> {
    let flat = text::flat_text(element);

    // Name comes from the first heading-like or emphasis-like descendant.
    let name = element
        .select(&NAME_SEL)
        .next()
        .map(text::flat_text)
        .unwrap_or_default();
    if name.is_empty() {
        return None;
    }

    let mut server = ServerRecord::new(category);
    server.processor = extract::processor::parse(&flat);
    server.processor.name = name;

    server.ram = extract::regions::ram_span(&flat);
    server.storage = extract::regions::storage_span(&flat);
    server.price = extract::price::raw_span(&flat);
    extract::included::parse(&flat).apply_to(&mut server);

    Some(server)
}
