use std::fs;
use std::process::ExitCode;

use aurum_core::PriceSource;
use aurum_panel::{render, RenderedPanel, ViewMode};

use crate::cli::ChartArgs;
use crate::error::CliError;

pub async fn run(args: &ChartArgs, source: &dyn PriceSource) -> Result<ExitCode, CliError> {
    let range = super::resolve_period(&args.period)?;
    let outcome = source.price_history(range).await;

    match render(outcome, ViewMode::Chart) {
        RenderedPanel::Chart(chart) => {
            fs::write(&args.output, chart.image.as_svg())?;

            println!(
                "Data period: from {} to {}",
                chart.period.start, chart.period.end
            );
            println!("Average Price: {:.2} PLN", chart.summary.mean);
            println!("Maximum Price: {:.2} PLN", chart.summary.max);
            println!("Minimum Price: {:.2} PLN", chart.summary.min);
            println!("Chart written to {}", args.output.display());

            Ok(ExitCode::SUCCESS)
        }
        other => Ok(super::emit_fallback(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::future::Future;
    use std::path::PathBuf;
    use std::pin::Pin;
    use std::sync::Arc;

    use aurum_core::{HttpClient, HttpError, HttpRequest, HttpResponse, NbpGoldAdapter};
    use tempfile::tempdir;

    use crate::cli::PeriodArgs;

    struct CannedHttpClient {
        status: u16,
        body: &'static str,
    }

    impl HttpClient for CannedHttpClient {
        fn execute<'a>(
            &'a self,
            _request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            Box::pin(async move { Ok(HttpResponse::with_status(self.status, self.body)) })
        }
    }

    fn canned_source(status: u16, body: &'static str) -> NbpGoldAdapter {
        NbpGoldAdapter::new(Arc::new(CannedHttpClient { status, body }))
            .with_base_url("https://api.nbp.test/api")
    }

    fn args(output: PathBuf) -> ChartArgs {
        ChartArgs {
            period: PeriodArgs {
                start: String::from("2024-01-02"),
                end: Some(String::from("2024-01-04")),
            },
            output,
        }
    }

    #[tokio::test]
    async fn writes_the_rendered_svg_to_the_requested_output_path() {
        let temp = tempdir().expect("tempdir");
        let output = temp.path().join("gold.svg");
        let source = canned_source(
            200,
            r#"[
                {"data": "2024-01-02", "cena": 269.04},
                {"data": "2024-01-03", "cena": 268.17},
                {"data": "2024-01-04", "cena": 270.55}
            ]"#,
        );

        run(&args(output.clone()), &source)
            .await
            .expect("chart run succeeds");

        let svg = fs::read_to_string(&output).expect("chart file written");
        assert!(svg.contains("<svg"), "output should be an SVG document");
    }

    #[tokio::test]
    async fn failed_fetch_leaves_no_output_file_behind() {
        let temp = tempdir().expect("tempdir");
        let output = temp.path().join("gold.svg");
        let source = canned_source(404, "404 NotFound");

        run(&args(output.clone()), &source)
            .await
            .expect("fallback still resolves");

        assert!(!output.exists(), "no chart file expected on a failed fetch");
    }
}
