use anyhow::Context;
use clap::Parser;
use geoblock_domain::CliOverrides;
use geoblock_infrastructure::GeoBlockFilter;
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod host;

#[derive(Parser)]
#[command(name = "geoblock")]
#[command(version)]
#[command(about = GeoBlockFilter::DESCRIPTION)]
#[command(long_about = GeoBlockFilter::long_description())]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Country blacklist file
    #[arg(short = 'b', long, value_name = "FILE")]
    blacklist: Option<String>,

    /// GeoIP2 country database
    #[arg(short = 'g', long, value_name = "FILE")]
    geoipdb: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Directory receiving the filtered replies
    #[arg(short = 'o', long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Wire-format DNS replies to filter ("-" reads stdin)
    #[arg(required = true, value_name = "REPLY")]
    replies: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        blacklist: cli.blacklist.clone(),
        geoipdb: cli.geoipdb.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting geoblock v{}", env!("CARGO_PKG_VERSION"));

    let filter = GeoBlockFilter::init(&config.filter).context("Filter initialization failed")?;

    let summary = host::run(&filter, &cli.replies, cli.output.as_deref())?;

    let stats = filter.stats();
    info!(
        replies = summary.replies,
        refused = summary.refused,
        errors = summary.errors,
        refusal_rate = stats.refusal_rate(),
        "Done"
    );

    Ok(())
}
