use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{extract, text};
use crate::model::ServerRecord;

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)AMD|Intel|Opteron|Xeon|EPYC|Ryzen|Core Series").unwrap());

static HEADING_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2, h3, h4").unwrap());
static TABLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static TR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static TD_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
static TH_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").unwrap());
static CTA_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a, button").unwrap());

/// Page-level section titles that match the vendor pattern but are not
/// per-family sections.
const GENERIC_SECTIONS: &[&str] = &["Instant Activation Preconfigured Servers", "Custom Servers"];

/// How far past a section heading to look for its table.
const SIBLING_SEARCH_LIMIT: usize = 10;

/// Fixed-column strategy: vendor-family section headings, each followed by a
/// table whose rows map positionally to record fields. Falls back to every
/// table on the page when no section yields a record.
pub fn extract_page(document: &Html, category: &str) -> Vec<ServerRecord> {
    let mut servers = Vec::new();

    for heading in document.select(&HEADING_SEL) {
        let section_name = text::clean_text(Some(heading));
        if !SECTION_RE.is_match(&section_name) {
            continue;
        }
        if GENERIC_SECTIONS.contains(&section_name.as_str()) {
            continue;
        }
        let Some(table) = find_following_table(heading) else {
            debug!(section = %section_name, "no table after section heading");
            continue;
        };

        let rows: Vec<ElementRef> = table.select(&TR_SEL).collect();
        println!("  Processing section '{section_name}' with {} rows", rows.len());

        let row_category = format!("{category} - {section_name}");
        for row in rows {
            if let Some(server) = parse_row(row, &row_category) {
                servers.push(server);
            }
        }
    }

    // No per-family section produced anything: treat every table as data.
    if servers.is_empty() {
        println!("  No section headers found, parsing all tables...");
        let tables: Vec<ElementRef> = document.select(&TABLE_SEL).collect();
        println!("  Found {} tables", tables.len());

        for (idx, table) in tables.iter().enumerate() {
            let rows: Vec<ElementRef> = table.select(&TR_SEL).collect();
            println!("  Table {}: {} rows", idx + 1, rows.len());
            for row in rows {
                if let Some(server) = parse_row(row, category) {
                    servers.push(server);
                }
            }
        }
    }

    servers
}

/// Search forward through the heading's element siblings for the first table,
/// directly or nested.
fn find_following_table(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
    for sibling in heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take(SIBLING_SEARCH_LIMIT)
    {
        if sibling.value().name() == "table" {
            return Some(sibling);
        }
        if let Some(table) = sibling.select(&TABLE_SEL).next() {
            return Some(table);
        }
    }
    None
}

// Column contract (0-indexed):
//   0: image (skipped)
//   1: processor
//   2: RAM
//   3: storage
//   4: included (bandwidth, IPs, location, flags)
//   5: price call-to-action
pub fn parse_row(row: ElementRef<'_>, category: &str) -> Option<ServerRecord> {
    let cells: Vec<ElementRef> = row.select(&TD_SEL).collect();

    // Header rows and spacer rows are not data.
    if cells.len() < 5 || row.select(&TH_SEL).next().is_some() {
        return None;
    }

    let mut server = ServerRecord::new(category);

    if let Some(cell) = cells.get(1) {
        server.processor = extract::processor::parse(&text::clean_text(Some(*cell)));
    }
    server.ram = text::clean_text(cells.get(2).copied());
    server.storage = text::clean_text(cells.get(3).copied());

    if let Some(cell) = cells.get(4) {
        let included = extract::included::parse(&text::clean_text(Some(*cell)));
        included.apply_to(&mut server);
    }

    if let Some(cell) = cells.get(5) {
        // The price renders inside a call-to-action control; prefer its text.
        let price_text = match cell.select(&CTA_SEL).next() {
            Some(button) => text::clean_text(Some(button)),
            None => text::clean_text(Some(*cell)),
        };
        server.price = extract::price::normalized(&price_text);
    }

    if server.has_signal() {
        Some(server)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_single_row(html: &str, category: &str) -> Option<ServerRecord> {
        let doc = Html::parse_fragment(html);
        let row = doc.select(&TR_SEL).next().unwrap();
        parse_row(row, category)
    }

    const DATA_ROW: &str = r#"<table><tr>
        <td><img src="cpu.png"></td>
        <td>Intel Xeon E-2288G<br>3.7Ghz<br>8 Cores / 16 threads</td>
        <td>32GB DDR4</td>
        <td>1TB NVMe SSD</td>
        <td>10TB Bandwidth, 1Gbit Port, 5 usable IPv4, Instant Deployment, DDoS Protection, Dallas</td>
        <td><a href="/order">$149.99/mo</a></td>
    </tr></table>"#;

    #[test]
    fn row_maps_cells_positionally() {
        let server = parse_single_row(DATA_ROW, "Dedicated Servers - Xeon E Series").unwrap();
        assert_eq!(server.processor.name, "Intel Xeon E-2288G");
        assert_eq!(server.processor.speed, "3.7GHz");
        assert_eq!(server.processor.cores, "8");
        assert_eq!(server.processor.threads, "16");
        assert_eq!(server.ram, "32GB DDR4");
        assert_eq!(server.storage, "1TB NVMe SSD");
        assert_eq!(server.bandwidth, "10TB Bandwidth");
        assert_eq!(server.port_speed, "1Gbit");
        assert_eq!(server.ipv4_addresses, "5 usable IPv4");
        assert!(server.instant_deployment);
        assert!(!server.free_setup);
        assert_eq!(server.location, "Dallas");
        assert_eq!(server.additional_features, vec!["DDoS Protection"]);
        assert_eq!(server.price, "$149.99/month");
        assert_eq!(server.category, "Dedicated Servers - Xeon E Series");
    }

    #[test]
    fn short_row_is_rejected() {
        let html = r#"<table><tr>
            <td>a</td><td>Intel Xeon</td><td>16GB</td><td>1TB</td>
        </tr></table>"#;
        assert!(parse_single_row(html, "x").is_none());
    }

    #[test]
    fn header_marker_row_is_rejected() {
        let html = r#"<table><tr>
            <th>CPU</th><td>Intel Xeon</td><td>16GB</td><td>1TB</td><td>stuff</td><td>$50</td>
        </tr></table>"#;
        assert!(parse_single_row(html, "x").is_none());
    }

    #[test]
    fn row_without_signal_is_rejected() {
        let html = r#"<table><tr>
            <td></td><td></td><td></td><td></td>
            <td>1Gbit Port, Dallas</td><td>$99/mo</td>
        </tr></table>"#;
        assert!(parse_single_row(html, "x").is_none());
    }

    #[test]
    fn price_falls_back_to_cell_text_without_cta() {
        let html = r#"<table><tr>
            <td></td><td>AMD Ryzen 3600</td><td>16GB</td><td>500GB SSD</td>
            <td>Unmetered Bandwidth</td><td>$60/mo</td>
        </tr></table>"#;
        let server = parse_single_row(html, "x").unwrap();
        assert_eq!(server.price, "$60/month");
        assert_eq!(server.bandwidth, "Unmetered unmetered");
    }

    #[test]
    fn sectioned_page_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/dedicated.html").unwrap();
        let doc = Html::parse_document(&html);
        let servers = extract_page(&doc, "Dedicated Servers");

        assert_eq!(servers.len(), 3);
        assert_eq!(
            servers[0].category,
            "Dedicated Servers - Intel Xeon E3 Series"
        );
        assert_eq!(servers[2].category, "Dedicated Servers - AMD Opteron Series");
        // Header rows inside the tables never become records.
        assert!(servers.iter().all(|s| s.has_signal()));
    }

    #[test]
    fn sectionless_page_uses_all_tables_fallback() {
        let html = std::fs::read_to_string("tests/fixtures/fallback.html").unwrap();
        let doc = Html::parse_document(&html);
        let servers = extract_page(&doc, "Legacy And Budget Dedicated Servers");

        assert_eq!(servers.len(), 3);
        // Fallback path keeps the caller's category without a section suffix.
        assert!(servers
            .iter()
            .all(|s| s.category == "Legacy And Budget Dedicated Servers"));
    }

    #[test]
    fn generic_section_headings_are_skipped() {
        let html = r#"
            <h2>Custom Servers</h2>
            <table><tr>
                <td></td><td>Intel Core i7</td><td>8GB</td><td>1TB</td><td>x</td><td>$40</td>
            </tr></table>
        "#;
        let doc = Html::parse_document(html);
        let servers = extract_page(&doc, "Custom Dedicated Servers");
        // The heading is excluded, so the row is only reached via fallback.
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].category, "Custom Dedicated Servers");
    }
}
