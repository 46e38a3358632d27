pub mod analysis;
pub mod chart;

use std::process::ExitCode;

use aurum_core::{CalendarDate, DateRange, NbpGoldAdapter};
use aurum_panel::RenderedPanel;

use crate::cli::{Cli, Command, PeriodArgs};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    // One adapter per invocation against the real NBP endpoint.
    let source = NbpGoldAdapter::default();

    match &cli.command {
        Command::Chart(args) => chart::run(args, &source).await,
        Command::Analysis(args) => analysis::run(args, &source).await,
    }
}

/// Resolves the CLI date bounds; a missing end date means today (UTC).
pub(crate) fn resolve_period(args: &PeriodArgs) -> Result<DateRange, CliError> {
    let start = CalendarDate::parse(&args.start)?;
    let end = match &args.end {
        Some(raw) => CalendarDate::parse(raw)?,
        None => CalendarDate::today_utc(),
    };

    Ok(DateRange::new(start, end))
}

/// Prints the non-data panels inline, mirroring how the dashboard surfaces
/// them inside the same view.
pub(crate) fn emit_fallback(panel: RenderedPanel) -> ExitCode {
    match panel {
        RenderedPanel::NoData(no_data) => {
            println!("{}", no_data.message);
            println!(
                "Data period: from {} to {}",
                no_data.period.start, no_data.period.end
            );
            ExitCode::SUCCESS
        }
        RenderedPanel::Error(error) => {
            println!("{}", error.message);
            tracing::debug!(detail = %error.detail, "render fell back to the error panel");
            ExitCode::from(3)
        }
        RenderedPanel::Chart(_) | RenderedPanel::Analysis(_) => ExitCode::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: &str, end: Option<&str>) -> PeriodArgs {
        PeriodArgs {
            start: start.to_owned(),
            end: end.map(str::to_owned),
        }
    }

    #[test]
    fn resolves_explicit_bounds() {
        let range =
            resolve_period(&period("2024-01-01", Some("2024-03-01"))).expect("must resolve");
        assert_eq!(range.start.to_string(), "2024-01-01");
        assert_eq!(range.end.to_string(), "2024-03-01");
    }

    #[test]
    fn missing_end_defaults_to_today() {
        let range = resolve_period(&period("2024-01-01", None)).expect("must resolve");
        assert_eq!(range.end, CalendarDate::today_utc());
    }

    #[test]
    fn malformed_start_is_a_validation_error() {
        let error = resolve_period(&period("01/01/2024", None)).expect_err("must fail");
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn inverted_bounds_are_not_rejected_locally() {
        // The upstream defines what an inverted range yields.
        let range =
            resolve_period(&period("2024-03-01", Some("2024-01-01"))).expect("must resolve");
        assert!(range.start > range.end);
    }
}
