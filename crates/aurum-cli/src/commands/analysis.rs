use std::process::ExitCode;

use aurum_core::PriceSource;
use aurum_panel::{render, RenderedPanel, ViewMode};

use crate::cli::AnalysisArgs;
use crate::error::CliError;

pub async fn run(args: &AnalysisArgs, source: &dyn PriceSource) -> Result<ExitCode, CliError> {
    let range = super::resolve_period(&args.period)?;
    let outcome = source.price_history(range).await;

    match render(outcome, ViewMode::Analysis) {
        RenderedPanel::Analysis(analysis) => {
            println!("Gold Price Analysis");
            println!(
                "Data period: from {} to {}",
                analysis.period.start, analysis.period.end
            );
            println!();
            println!("{:<22} {:>12}  Definition", "Statistic", "Value");

            for row in &analysis.rows {
                println!(
                    "{:<22} {:>12.2}  {}",
                    row.statistic.label(),
                    row.value,
                    row.definition
                );
            }

            Ok(ExitCode::SUCCESS)
        }
        other => Ok(super::emit_fallback(other)),
    }
}
