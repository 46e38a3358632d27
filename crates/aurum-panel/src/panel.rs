//! Panel construction: one fetch outcome plus one view in, one renderable
//! panel out.
//!
//! [`render`] is a pure function of its inputs. Fetch errors become an error
//! panel, an empty series becomes a no-data panel, and only a non-empty
//! series produces a chart or analysis table. All reported figures are
//! rounded to 2 decimals at this boundary; the statistics themselves are
//! computed from the unrounded series.

use serde::Serialize;

use aurum_core::{round2, DateRange, FetchOutcome, PriceSeries, StatisticsSummary};

use crate::chart::{render_price_chart, ChartImage, RenderError};
use crate::view::ViewMode;

/// User-visible text shown when the fetch fails.
const FETCH_ERROR_MESSAGE: &str = "Error fetching data. Please try again later.";
/// User-visible text shown when the chart itself cannot be drawn.
const RENDER_ERROR_MESSAGE: &str = "Error rendering chart. Please try again later.";
/// User-visible text shown when the upstream answers with zero records.
const NO_DATA_MESSAGE: &str = "No price data for the selected period.";

/// One named statistic of the analysis table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    AveragePrice,
    MinimumPrice,
    MaximumPrice,
    FirstQuartile,
    Median,
    ThirdQuartile,
    Mode,
    StandardDeviation,
    InterquartileRange,
}

impl Statistic {
    /// Table row order, fixed.
    pub const ALL: [Self; 9] = [
        Self::AveragePrice,
        Self::MinimumPrice,
        Self::MaximumPrice,
        Self::FirstQuartile,
        Self::Median,
        Self::ThirdQuartile,
        Self::Mode,
        Self::StandardDeviation,
        Self::InterquartileRange,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::AveragePrice => "Average Price",
            Self::MinimumPrice => "Minimum Price",
            Self::MaximumPrice => "Maximum Price",
            Self::FirstQuartile => "First Quartile",
            Self::Median => "Median",
            Self::ThirdQuartile => "Third Quartile",
            Self::Mode => "Mode",
            Self::StandardDeviation => "Standard Deviation",
            Self::InterquartileRange => "Interquartile Range",
        }
    }

    pub const fn definition(self) -> &'static str {
        match self {
            Self::AveragePrice => "The arithmetic mean of gold prices over a given period.",
            Self::MinimumPrice => "The lowest gold price over a given period.",
            Self::MaximumPrice => "The highest gold price over a given period.",
            Self::FirstQuartile => {
                "The value below which 25% of the lowest prices are found."
            }
            Self::Median => {
                "The middle value separating the lower half from the upper half of the data."
            }
            Self::ThirdQuartile => {
                "The value below which 75% of the lowest prices are found."
            }
            Self::Mode => "The value that appears most frequently in the dataset.",
            Self::StandardDeviation => {
                "A measure of data dispersion around the mean value."
            }
            Self::InterquartileRange => {
                "The difference between the third and first quartile, indicating data dispersion."
            }
        }
    }

    const fn pick(self, summary: &StatisticsSummary) -> f64 {
        match self {
            Self::AveragePrice => summary.mean,
            Self::MinimumPrice => summary.min,
            Self::MaximumPrice => summary.max,
            Self::FirstQuartile => summary.q1,
            Self::Median => summary.median,
            Self::ThirdQuartile => summary.q3,
            Self::Mode => summary.mode,
            Self::StandardDeviation => summary.std_dev,
            Self::InterquartileRange => summary.iqr,
        }
    }
}

/// One row of the analysis table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticRow {
    pub statistic: Statistic,
    /// Rounded to 2 decimals for display.
    pub value: f64,
    pub definition: &'static str,
}

/// Short summary shown under the chart, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl ChartSummary {
    fn from_summary(summary: &StatisticsSummary) -> Self {
        Self {
            mean: round2(summary.mean),
            min: round2(summary.min),
            max: round2(summary.max),
        }
    }
}

/// Chart view payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub image: ChartImage,
    pub summary: ChartSummary,
    pub period: DateRange,
}

/// Analysis view payload: one row per statistic, fixed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisPanel {
    pub rows: Vec<StatisticRow>,
    pub period: DateRange,
}

/// Inline error payload; rendered in place of a chart or table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPanel {
    pub message: &'static str,
    pub detail: String,
}

/// Zero-record payload for an otherwise successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoDataPanel {
    pub message: &'static str,
    pub period: DateRange,
}

/// Renderable result of one fetch-then-render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum RenderedPanel {
    Chart(ChartPanel),
    Analysis(AnalysisPanel),
    NoData(NoDataPanel),
    Error(ErrorPanel),
}

/// Renders one fetch outcome into the requested view.
pub fn render(outcome: FetchOutcome, view: ViewMode) -> RenderedPanel {
    let series = match outcome {
        Ok(series) => series,
        Err(error) => {
            return RenderedPanel::Error(ErrorPanel {
                message: FETCH_ERROR_MESSAGE,
                detail: error.to_string(),
            })
        }
    };

    let Some(summary) = StatisticsSummary::from_series(&series) else {
        return RenderedPanel::NoData(NoDataPanel {
            message: NO_DATA_MESSAGE,
            period: series.period(),
        });
    };

    match view {
        ViewMode::Chart => render_chart_panel(&series, &summary),
        ViewMode::Analysis => RenderedPanel::Analysis(AnalysisPanel {
            rows: analysis_rows(&summary),
            period: series.period(),
        }),
    }
}

fn render_chart_panel(series: &PriceSeries, summary: &StatisticsSummary) -> RenderedPanel {
    match render_price_chart(series) {
        Ok(image) => RenderedPanel::Chart(ChartPanel {
            image,
            summary: ChartSummary::from_summary(summary),
            period: series.period(),
        }),
        Err(error) => render_failure_panel(error),
    }
}

fn render_failure_panel(error: RenderError) -> RenderedPanel {
    RenderedPanel::Error(ErrorPanel {
        message: RENDER_ERROR_MESSAGE,
        detail: error.to_string(),
    })
}

fn analysis_rows(summary: &StatisticsSummary) -> Vec<StatisticRow> {
    Statistic::ALL
        .iter()
        .map(|statistic| StatisticRow {
            statistic: *statistic,
            value: round2(statistic.pick(summary)),
            definition: statistic.definition(),
        })
        .collect()
}
