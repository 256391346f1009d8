use std::sync::LazyLock;

use regex::Regex;

use crate::model::ServerRecord;

static BW_PORT_UNMETERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+[MG]bit)\s+unmetered").unwrap());
static BW_TB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*TB\s+(?:Monthly Transfer|Bandwidth)?").unwrap());
static BW_FLAT_UNMETERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Unmetered\s+(?:Bandwidth|Transfer)").unwrap());
static PORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+[MG]bit)\s+Port").unwrap());
static IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+usable\s+IPv4").unwrap());
static IPV6_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)/(\d+)\s+IPv6").unwrap());
static INSTANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Instant\s+Deployment").unwrap());
static FREE_SETUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)FREE\s+Setup").unwrap());

/// Known datacenter cities, in priority order: the first list entry found
/// anywhere in the text wins, not the first occurrence in the text.
const LOCATIONS: &[&str] = &[
    "Dallas",
    "Charlotte",
    "Lenoir",
    "Kansas",
    "Phoenix",
    "Denver",
    "Los Angeles",
    "New York",
];

/// Keyword → feature tag, checked independently; any subset may apply.
const FEATURE_KEYWORDS: &[(&str, &str)] = &[
    ("ddos", "DDoS Protection"),
    ("ipmi", "IPMI"),
    ("customizable", "Customizable"),
    ("backup", "Backup"),
    ("remote reboot", "Remote Reboot"),
];

/// Everything pulled out of the "Included" composite region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Included {
    pub bandwidth: String,
    pub port_speed: String,
    pub ipv4_addresses: String,
    pub ipv6_addresses: String,
    pub location: String,
    pub instant_deployment: bool,
    pub free_setup: bool,
    pub additional_features: Vec<String>,
}

impl Included {
    pub fn apply_to(self, record: &mut ServerRecord) {
        record.bandwidth = self.bandwidth;
        record.port_speed = self.port_speed;
        record.ipv4_addresses = self.ipv4_addresses;
        record.ipv6_addresses = self.ipv6_addresses;
        record.location = self.location;
        record.instant_deployment = self.instant_deployment;
        record.free_setup = self.free_setup;
        record.additional_features = self.additional_features;
    }
}

pub fn parse(text: &str) -> Included {
    let mut details = Included::default();
    if text.is_empty() {
        return details;
    }
    let lower = text.to_lowercase();

    details.bandwidth = extract_bandwidth(text, &lower);

    if let Some(caps) = PORT_RE.captures(text) {
        details.port_speed = caps[1].to_string();
    }
    if let Some(caps) = IPV4_RE.captures(text) {
        details.ipv4_addresses = format!("{} usable IPv4", &caps[1]);
    }
    if let Some(caps) = IPV6_RE.captures(text) {
        details.ipv6_addresses = format!("/{} IPv6 Block", &caps[1]);
    }

    details.instant_deployment = INSTANT_RE.is_match(text);
    details.free_setup = FREE_SETUP_RE.is_match(text);

    for loc in LOCATIONS {
        if lower.contains(&loc.to_lowercase()) {
            details.location = (*loc).to_string();
            break;
        }
    }

    for (keyword, tag) in FEATURE_KEYWORDS {
        if lower.contains(keyword) {
            details.additional_features.push((*tag).to_string());
        }
    }

    details
}

/// Bandwidth patterns are tried in a fixed order; the first match wins.
/// If "unmetered" appears anywhere in the text the value is forced into
/// "<value> unmetered" shape even when matched via the TB pattern.
fn extract_bandwidth(text: &str, lower: &str) -> String {
    let patterns: [&Regex; 3] = [&BW_PORT_UNMETERED_RE, &BW_TB_RE, &BW_FLAT_UNMETERED_RE];
    for re in patterns {
        if let Some(caps) = re.captures(text) {
            if lower.contains("unmetered") {
                let value = caps.get(1).map_or("Unmetered", |m| m.as_str());
                return format!("{value} unmetered");
            }
            return caps[0].trim_end().to_string();
        }
    }
    String::new()
}
