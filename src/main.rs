mod config;
mod fetch;
mod model;
mod parser;
mod pipeline;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use config::ScrapeConfig;
use parser::Strategy;

#[derive(Parser)]
#[command(name = "nocix_scraper", about = "NOCIX dedicated-server listing scraper")]
struct Cli {
    /// Output JSON file
    #[arg(short, long, default_value = "nocix_servers.json")]
    output: PathBuf,
    /// Extraction strategy (auto tries table first, then blocks)
    #[arg(short, long, value_enum, default_value = "auto")]
    strategy: Strategy,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let config = ScrapeConfig {
        output_path: cli.output,
        strategy: cli.strategy,
        ..Default::default()
    };

    let servers = pipeline::run(&config)?;
    if !servers.is_empty() {
        pipeline::save_json(&servers, &config.output_path)?;
    }
    report::print_summary(&servers);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
