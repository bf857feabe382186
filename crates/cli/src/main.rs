//! Gilded Rose stock runner.
//!
//! Loads a stock list, ages it day by day and prints a report for each day.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gildedrose_inventory::stock;
use gildedrose_observability::LogFormat;

const LOG_FORMAT_ENV: &str = "GILDED_ROSE_LOG_FORMAT";

/// Age a Gilded Rose stock list and print daily reports
#[derive(Parser, Debug)]
#[command(name = "gilded-rose")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of days to simulate
    #[arg(short, long, default_value_t = 2)]
    days: u32,

    /// JSON stock file (array of {name, sell_in, quality}); built-in stock if omitted
    #[arg(short, long)]
    stock: Option<PathBuf>,

    /// Log format: json or text (falls back to GILDED_ROSE_LOG_FORMAT)
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Print the final stock as JSON after the report
    #[arg(long)]
    snapshot: bool,
}

fn log_format(cli: &Cli) -> LogFormat {
    if let Some(format) = cli.log_format {
        return format;
    }
    match std::env::var(LOG_FORMAT_ENV) {
        Ok(value) => value.parse().unwrap_or_else(|err| {
            eprintln!("{LOG_FORMAT_ENV}: {err}; using json");
            LogFormat::Json
        }),
        Err(_) => LogFormat::default(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    gildedrose_observability::init_with(log_format(&cli));

    let mut inventory = match &cli.stock {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read stock file {}", path.display()))?;
            stock::from_json(&raw)
                .with_context(|| format!("invalid stock file {}", path.display()))?
        }
        None => {
            tracing::info!("no stock file given; using starter stock");
            report::starter_stock()
        }
    };

    tracing::info!(items = inventory.len(), days = cli.days, "simulating");
    print!("{}", report::render_run(&mut inventory, cli.days));

    if cli.snapshot {
        println!("{}", stock::to_json(&inventory).context("failed to encode snapshot")?);
    }

    Ok(())
}
