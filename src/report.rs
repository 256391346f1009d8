use crate::model::ServerRecord;

type FieldCheck = (&'static str, fn(&ServerRecord) -> bool);

/// Fields counted in the coverage table, with their non-empty/true tests.
const FIELDS: &[FieldCheck] = &[
    ("processor.name", |s| !s.processor.name.is_empty()),
    ("ram", |s| !s.ram.is_empty()),
    ("storage", |s| !s.storage.is_empty()),
    ("bandwidth", |s| !s.bandwidth.is_empty()),
    ("port_speed", |s| !s.port_speed.is_empty()),
    ("ipv4_addresses", |s| !s.ipv4_addresses.is_empty()),
    ("ipv6_addresses", |s| !s.ipv6_addresses.is_empty()),
    ("instant_deployment", |s| s.instant_deployment),
    ("free_setup", |s| s.free_setup),
    ("price", |s| !s.price.is_empty()),
];

/// Print a sample record and the per-field coverage percentages.
pub fn print_summary(servers: &[ServerRecord]) {
    if servers.is_empty() {
        println!("\n⚠ No servers found. Please check the website structure.");
        return;
    }

    println!("\nSample server data:");
    println!("{}", "=".repeat(80));
    match serde_json::to_string_pretty(&servers[0]) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("(sample unavailable: {e})"),
    }

    println!("\n{}", "=".repeat(80));
    println!("Field coverage statistics:");
    println!("{}", "=".repeat(80));
    for (name, count) in coverage(servers) {
        let percentage = count as f64 / servers.len() as f64 * 100.0;
        println!("{name:20}: {count:3}/{:3} ({percentage:5.1}%)", servers.len());
    }
}

/// Coverage counts, separated from printing so they can be asserted on.
pub fn coverage(servers: &[ServerRecord]) -> Vec<(&'static str, usize)> {
    FIELDS
        .iter()
        .map(|(name, check)| (*name, servers.iter().filter(|s| check(s)).count()))
        .collect()
}
