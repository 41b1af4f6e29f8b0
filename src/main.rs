//! PhoneBill command-line calculator
//!
//! Reads a call log file, computes the amount due, and prints it.
//! Logs go to stderr so stdout carries only the bill.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use phonebill_core::{traits::TelephoneBillCalculator, AppConfig};
use phonebill_services::BillCalculator;
use std::{fs, io, path::PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for the bill
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Amount due only
    Text,
    /// Itemized bill as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "phone-bill")]
#[command(version)]
#[command(about = "Compute a telephone bill from a call log", long_about = None)]
struct Cli {
    /// Call log: one `<phone>,<dd-MM-yyyy HH:mm:ss>,<dd-MM-yyyy HH:mm:ss>` per line
    #[arg(value_name = "LOG")]
    log: PathBuf,

    /// Configuration file (defaults to config/default and PHONEBILL__* variables)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Initialize tracing/logging
fn init_tracing(default_level: &str) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "phone_bill={},phonebill_core={},phonebill_services={}",
            log_level, log_level, log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };
    config.validate().context("invalid configuration")?;

    init_tracing(&config.logging.level);

    info!(
        "Starting PhoneBill v{} for {}",
        env!("CARGO_PKG_VERSION"),
        cli.log.display()
    );
    debug!(tariff = ?config.tariff, "Tariff loaded");

    let log = fs::read_to_string(&cli.log)
        .with_context(|| format!("failed to read call log {}", cli.log.display()))?;
    let lines = log.lines().filter(|line| !line.trim().is_empty());

    let calculator = BillCalculator::new(config.tariff);

    match cli.format {
        OutputFormat::Text => {
            let total = calculator
                .calculate(lines)
                .with_context(|| format!("failed to bill {}", cli.log.display()))?;
            println!("{}", total);
        }
        OutputFormat::Json => {
            let bill = calculator
                .itemize(lines)
                .with_context(|| format!("failed to bill {}", cli.log.display()))?;
            println!("{}", serde_json::to_string_pretty(&bill)?);
        }
    }

    Ok(())
}
