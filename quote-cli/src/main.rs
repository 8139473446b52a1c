use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use quote_cli::app;
use quote_cli::logging;
use quote_cli::report::{QuoteReport, Selection};

// ─── CLI definition ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Cost/benefit report for an IT maintenance quote.
///
/// Derives revenue at risk from the customer's annual revenue and shift
/// pattern, then prices every tier pair in the catalog against it.
#[derive(Debug, Parser)]
#[command(name = "quote-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML quote file. The sample customer is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog CSV, overriding the quote file's `catalog` entry.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Platform tier the customer selected.
    #[arg(long)]
    platform: Option<String>,

    /// Hardware tier the customer selected.
    #[arg(long)]
    hardware: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Include per-category feature comparison tables in text output.
    #[arg(long, default_value_t = false)]
    features: bool,

    /// Log filter, e.g. `debug` or `warn,quote_core=debug`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let inputs = app::load_inputs(cli.config.as_deref(), cli.catalog.as_deref())?;
    debug!(
        plans = inputs.catalog.plans().count(),
        custom_catalog = inputs.catalog_path.is_some(),
        "inputs loaded"
    );

    let selection = Selection {
        platform: cli.platform,
        hardware: cli.hardware,
    };
    let report = QuoteReport::build(
        &inputs.config.company,
        &inputs.catalog,
        &inputs.config.merged_shift_patterns(),
        &selection,
    )
    .context("Failed to analyse quote")?;

    match cli.format {
        Format::Text => print!(
            "{}",
            report
                .render_text(cli.features)
                .context("Failed to render report")?
        ),
        Format::Json => println!(
            "{}",
            report.render_json().context("Failed to serialise report")?
        ),
    }

    Ok(())
}
