//! Price chart rendering.
//!
//! [`render_price_chart`] is a pure function over the series: every call
//! creates its own drawing context, writes the plot into a fresh in-memory
//! SVG buffer, and releases the context before returning. No drawing state
//! survives between calls.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use plotters::prelude::*;
use serde::Serialize;
use thiserror::Error;

use aurum_core::{PriceRecord, PriceSeries};

const CHART_WIDTH: u32 = 1300;
const CHART_HEIGHT: u32 = 600;

/// Chart rendering failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("cannot chart an empty series")]
    EmptySeries,
    #[error("chart drawing failed: {0}")]
    Drawing(String),
}

/// In-memory encoded chart image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartImage {
    svg: String,
}

impl ChartImage {
    pub fn as_svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    /// Base64 data URI suitable for an inline `<img>` embed.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(self.svg.as_bytes())
        )
    }
}

/// Renders the price-versus-date line plot for a non-empty series.
pub fn render_price_chart(series: &PriceSeries) -> Result<ChartImage, RenderError> {
    if series.is_empty() {
        return Err(RenderError::EmptySeries);
    }

    let records = series.records();
    let prices = series.prices();
    let (y_min, y_max) = price_axis_bounds(&prices);
    let x_max = (records.len() - 1).max(1) as i32;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Gold prices (NBP)", ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(64)
            .build_cartesian_2d(0..x_max, y_min..y_max)
            .map_err(drawing_error)?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Gold price (PLN)")
            .x_labels(8)
            .x_label_formatter(&|index| date_label(records, *index))
            .draw()
            .map_err(drawing_error)?;

        chart
            .draw_series(LineSeries::new(
                prices.iter().enumerate().map(|(i, price)| (i as i32, *price)),
                &BLUE,
            ))
            .map_err(drawing_error)?
            .label("Actual price")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(drawing_error)?;

        root.present().map_err(drawing_error)?;
    }

    Ok(ChartImage { svg })
}

fn drawing_error(error: impl std::fmt::Display) -> RenderError {
    RenderError::Drawing(error.to_string())
}

/// Pads the y axis so a flat series still gets a visible band.
fn price_axis_bounds(prices: &[f64]) -> (f64, f64) {
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let span = max - min;
    if span < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min - span * 0.05, max + span * 0.05)
    }
}

fn date_label(records: &[PriceRecord], index: i32) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|i| records.get(i))
        .map(|record| record.date.to_string())
        .unwrap_or_default()
}
