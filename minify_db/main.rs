//! Produces the minified, stripped-down copy of the YAML mod database.

mod filter;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_yaml::Mapping;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "minify_db", about = "Minify and strip the YAML mod database")]
struct Cli {
    /// Path to the full database
    input: PathBuf,
    /// Path the minified database is written to
    output: PathBuf,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("fatal: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    info!("Opening database {}", cli.input.display());
    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    info!("Opened database ({} bytes)", raw.len());

    info!("Reading database");
    let database: Vec<Mapping> =
        serde_yaml::from_str(&raw).context("parsing database")?;

    info!("Stripping database");
    let minified = filter::minify(database);

    let yaml = serde_yaml::to_string(&minified).context("serializing minified database")?;
    info!("New size: {} bytes", yaml.len());

    info!("Saving database to {}", cli.output.display());
    fs::write(&cli.output, yaml)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!("Done");
    Ok(())
}
