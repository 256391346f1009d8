use std::path::PathBuf;
use std::time::Duration;

use crate::parser::Strategy;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Everything the pipeline needs, passed in at construction. No ambient
/// global state.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub urls: Vec<String>,
    pub user_agent: String,
    pub request_timeout: Duration,
    /// Politeness delay between successive page fetches.
    pub delay: Duration,
    pub output_path: PathBuf,
    pub strategy: Strategy,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            urls: vec![
                "https://www.nocix.net/dedicated/".to_string(),
                "https://www.nocix.net/custom-dedicated-servers/".to_string(),
                "https://www.nocix.net/game-dedicated-servers/".to_string(),
                "https://www.nocix.net/enterprise-dedicated-servers/".to_string(),
                "https://www.nocix.net/high-performance-dedicated-servers/".to_string(),
                "https://www.nocix.net/legacy-and-budget-dedicated-servers/".to_string(),
            ],
            user_agent: BROWSER_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(30),
            delay: Duration::from_secs(2),
            output_path: PathBuf::from("nocix_servers.json"),
            strategy: Strategy::Auto,
        }
    }
}

/// Listing category from the URL path: last segment, hyphens to spaces,
/// title-cased. The bare "dedicated" landing page gets a friendlier name.
pub fn category_for_url(url: &str) -> String {
    let segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let category = title_case(&segment.replace('-', " "));
    if category.eq_ignore_ascii_case("dedicated") {
        "Dedicated Servers".to_string()
    } else {
        category
    }
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
