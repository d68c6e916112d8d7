use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use proforma_data::{Project, ReportOptions, render_json, render_table};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ─── CLI ─────────────────────────────────────────────────────────────────────

/// Project a hotel operating statement over its forecast horizon.
#[derive(Debug, Parser)]
#[command(name = "proforma")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Property configuration (TOML)
    #[arg(short, long)]
    config: PathBuf,

    /// Historical actuals CSV: line,year,value
    #[arg(short, long)]
    actuals: PathBuf,

    /// Forecast inputs CSV: line,method,year,value
    #[arg(short, long)]
    inputs: PathBuf,

    /// Count the YTD year in the horizon total
    #[arg(long, default_value_t = false)]
    include_ytd: bool,

    /// Show per-room and percent drivers under each line
    #[arg(long, default_value_t = false)]
    drivers: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let project = Project::from_files(&cli.config, &cli.actuals, &cli.inputs)
        .with_context(|| format!("Failed to load project from {}", cli.config.display()))?;
    let statement = project
        .statement()
        .context("Failed to build operating statement")?;

    debug!(columns = statement.columns().len(), "rendering statement");
    match cli.format {
        Format::Table => {
            let options = ReportOptions {
                include_ytd: cli.include_ytd,
                show_drivers: cli.drivers,
            };
            print!("{}", render_table(&project.config.property_name, &statement, options));
        }
        Format::Json => {
            println!("{}", render_json(&statement).context("Failed to serialize statement")?);
        }
    }

    Ok(())
}
