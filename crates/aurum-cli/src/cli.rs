//! CLI argument definitions for aurum.
//!
//! The CLI is the external host layer around the fetch-then-render pipeline:
//! it collects two date bounds and a view selection, runs one cycle, and
//! prints the resulting panel.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `chart` | Render the gold price chart plus a short summary |
//! | `analysis` | Print the descriptive statistics table |
//!
//! # Examples
//!
//! ```bash
//! # Chart for a period, written as SVG
//! aurum chart --start 2024-01-01 --end 2024-03-01 --output gold.svg
//!
//! # Full statistics table
//! aurum analysis --start 2024-01-01
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Gold price dashboard over the public NBP API.
#[derive(Debug, Parser)]
#[command(
    name = "aurum",
    author,
    version,
    about = "Gold price charts and statistics from the NBP API"
)]
pub struct Cli {
    /// Enable verbose diagnostic logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the gold price chart for the selected period.
    Chart(ChartArgs),
    /// Print the gold price analysis table for the selected period.
    Analysis(AnalysisArgs),
}

/// Date bounds shared by both views.
#[derive(Debug, Args)]
pub struct PeriodArgs {
    /// Period start date (YYYY-MM-DD).
    #[arg(long, default_value = "2024-01-01")]
    pub start: String,

    /// Period end date (YYYY-MM-DD); defaults to today (UTC).
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Where to write the rendered SVG chart.
    #[arg(long, default_value = "gold_chart.svg")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct AnalysisArgs {
    #[command(flatten)]
    pub period: PeriodArgs,
}
