use serde::{Deserialize, Serialize};

/// Processor sub-record. Every field is a string; empty means "not found".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Processor {
    pub name: String,
    pub speed: String,
    pub cores: String,
    pub threads: String,
}

/// One server offer as extracted from a listing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub category: String,
    pub processor: Processor,
    pub ram: String,
    pub storage: String,
    pub bandwidth: String,
    pub port_speed: String,
    pub ipv4_addresses: String,
    pub ipv6_addresses: String,
    pub location: String,
    pub price: String,
    pub instant_deployment: bool,
    pub free_setup: bool,
    pub additional_features: Vec<String>,
}

impl ServerRecord {
    pub fn new(category: &str) -> Self {
        ServerRecord {
            category: category.to_string(),
            ..Default::default()
        }
    }

    /// Retention gate for the table strategy: at least one identifying field.
    pub fn has_signal(&self) -> bool {
        !self.processor.name.is_empty() || !self.ram.is_empty() || !self.storage.is_empty()
    }
}

/// Top-level shape of the persisted JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeOutput {
    pub scraped_at: String,
    pub total_servers: usize,
    pub servers: Vec<ServerRecord>,
}
