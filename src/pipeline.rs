use std::path::Path;
use std::thread;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::{self, ScrapeConfig};
use crate::fetch::PageFetcher;
use crate::model::{ScrapeOutput, ServerRecord};
use crate::parser;

/// Fetch and extract every configured URL in sequence, one page at a time.
/// Fetch failures are logged and skipped; the run continues.
pub fn run(config: &ScrapeConfig) -> Result<Vec<ServerRecord>> {
    let fetcher = PageFetcher::new(&config.user_agent, config.request_timeout)?;
    let mut all_servers = Vec::new();

    for url in &config.urls {
        println!("\nScraping {url}...");
        let category = config::category_for_url(url);

        match fetcher.fetch(url) {
            Ok(html) => {
                let servers = parser::parse_page(&html, &category, config.strategy);
                info!(url = %url, count = servers.len(), "page extracted");
                println!("✓ Found {} servers in {}", servers.len(), category);
                all_servers.extend(servers);
            }
            Err(e) => {
                warn!(url = %url, error = %e, "fetch failed, skipping page");
                println!("✗ Failed to fetch {category}");
            }
        }

        thread::sleep(config.delay);
    }

    Ok(all_servers)
}

/// Persist the result document. A write failure here is the only fatal error
/// of the whole run.
pub fn save_json(servers: &[ServerRecord], path: &Path) -> Result<()> {
    let output = ScrapeOutput {
        scraped_at: chrono::Local::now().to_rfc3339(),
        total_servers: servers.len(),
        servers: servers.to_vec(),
    };

    let json = serde_json::to_string_pretty(&output)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write output to {}", path.display()))?;

    println!("\n{}", "=".repeat(80));
    println!("Data saved to {}", path.display());
    println!("Total servers scraped: {}", servers.len());
    println!("{}", "=".repeat(80));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_document_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("servers.json");

        let mut server = ServerRecord::new("Dedicated Servers");
        server.processor.name = "Intel Xeon E-2288G".into();
        server.price = "$149.99/month".into();

        save_json(&[server], &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: ScrapeOutput = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.total_servers, 1);
        assert_eq!(parsed.servers[0].processor.name, "Intel Xeon E-2288G");
        assert!(!parsed.scraped_at.is_empty());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let err = save_json(&[], Path::new("/nonexistent-dir/out.json")).unwrap_err();
        assert!(err.to_string().contains("failed to write output"));
    }
}
