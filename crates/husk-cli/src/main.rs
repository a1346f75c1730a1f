//! Husk recovery binary.
//!
//! # Usage
//!
//! ```bash
//! # Recover an Algorand backup with default file names
//! husk algorand
//!
//! # Explicit file locations
//! husk ethereum backup.json mykeys.json recovered.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use husk_cli::{RecoverConfig, run};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Husk backup recovery tool
#[derive(Parser, Debug)]
#[command(name = "husk")]
#[command(about = "Recover secrets from multi-layer encrypted backups")]
#[command(version)]
struct Args {
    /// Chain whose keys sealed the backup (eos, ethereum, algorand)
    chain: String,

    /// Backup file: JSON array of encrypted records
    #[arg(default_value = "input.json")]
    input: PathBuf,

    /// Private keys file: JSON array, innermost layer's key first
    #[arg(default_value = "keys.json")]
    keys: PathBuf,

    /// Where to write recovered and residual payloads
    #[arg(default_value = "output.json")]
    output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let config = RecoverConfig {
        chain: args.chain,
        input: args.input,
        keys: args.keys,
        output: args.output,
    };

    if let Err(err) = run(&config).await {
        tracing::error!("Problem: {err}");
        std::process::exit(1);
    }
}
