use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use hotel_management::{DemoConfig, Scenario};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Prints one instance of every hotel entity
#[derive(Parser, Debug)]
#[command(name = "hotel-demo", version, about)]
struct Args {
    /// JSON file overriding the default scenario values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Diagnostics go to stderr so the report on stdout stays stable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("An error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => DemoConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DemoConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let scenario = Scenario::run(&config, Utc::now(), &mut out).context("demo scenario failed")?;
    out.flush()?;

    info!(
        booking_id = scenario.booking.id(),
        total_cost = scenario.invoice.total_cost(),
        guest_points = scenario.guest.read().loyalty_points(),
        rejections = scenario.rejections.len(),
        "Demo finished"
    );
    Ok(())
}
