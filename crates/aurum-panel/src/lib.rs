//! # Aurum Panel
//!
//! Statistics and rendering adapter for the aurum gold price dashboard.
//!
//! Takes the outcome of one fetch and a requested [`ViewMode`], and produces
//! a [`RenderedPanel`]: a chart image with a short summary, a descriptive
//! statistics table, a no-data notice, or an inline error. Rendering is a
//! pure function of its inputs; there is no session state and no drawing
//! context retained between calls.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chart`] | SVG line-plot rendering |
//! | [`panel`] | Panel assembly and the statistics table |
//! | [`view`] | View mode selector |

pub mod chart;
pub mod panel;
pub mod view;

pub use chart::{render_price_chart, ChartImage, RenderError};

pub use panel::{
    render, AnalysisPanel, ChartPanel, ChartSummary, ErrorPanel, NoDataPanel, RenderedPanel,
    Statistic, StatisticRow,
};

pub use view::ViewMode;
