//! Converts the GEMS HTML index into the full YAML mod database.

mod document;
mod error;
mod fields;
mod model;
mod report;
mod reqs;
mod table;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use crate::report::Report;

/// Supplementary DLC entries, prepended verbatim to the generated output.
const DLC_FILE: &str = "dlc.yml";

#[derive(Parser)]
#[command(name = "convert", about = "Convert the GEMS HTML index to a YAML mod database")]
struct Cli {
    /// Path to the saved index HTML
    input: PathBuf,
    /// Path the database is written to
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
    info!("Reading HTML from {}", cli.input.display());
    let html = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    info!("Extracting mod data");
    let mut report = Report::new();
    let mods = document::mods_from_html(&html, &mut report)?;
    for event in report.events() {
        warn!("{event}");
    }
    info!("Loaded {} mods", mods.len());

    info!("Building YAML database from mod data");
    let yaml = serde_yaml::to_string(&mods).context("serializing mod records")?;

    info!("Injecting DLC info");
    let dlc = fs::read_to_string(DLC_FILE)
        .with_context(|| format!("reading {DLC_FILE}"))?;
    let database = format!("{dlc}\n{yaml}");
    info!("Built database ({} bytes)", database.len());

    info!("Saving database to {}", cli.output.display());
    fs::write(&cli.output, database)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!("Done");
    Ok(())
}
