//! Coat room demo binary.
//!
//! # Usage
//!
//! ```bash
//! # Narrate the gala evening
//! cloakroom-demo
//!
//! # Include storage and dispatch details
//! RUST_LOG=debug cloakroom-demo --no-summary
//! ```

use clap::Parser;
use cloakroom_demo::{DemoConfig, Scenario, log_summary, run_scenario};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Coat room demo
#[derive(Parser, Debug)]
#[command(name = "cloakroom-demo")]
#[command(about = "Walks three guests through a staffed coat room")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Skip the end-of-evening summary
    #[arg(long)]
    no_summary: bool,
}

impl From<Args> for DemoConfig {
    fn from(args: Args) -> Self {
        Self { log_level: args.log_level, summary: !args.no_summary }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::from(Args::parse());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().without_time().with_target(false))
        .with(filter)
        .init();

    let summary = run_scenario(&Scenario::gala())?;

    if config.summary {
        log_summary(&summary);
    }

    Ok(())
}
