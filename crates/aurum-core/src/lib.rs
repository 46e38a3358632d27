//! # Aurum Core
//!
//! Domain types, upstream transport, and descriptive statistics for the
//! aurum gold price dashboard.
//!
//! ## Overview
//!
//! - **Canonical domain models** for calendar dates, date ranges, and price
//!   records
//! - **Price source contract** for upstream adapters, with a structured
//!   fetch error taxonomy
//! - **NBP adapter** for the public `cenyzlota` gold price endpoint
//! - **Descriptive statistics** (mean, quartiles, mode, deviation) computed
//!   from unrounded data
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Upstream source adapters (NBP) |
//! | [`domain`] | Domain models (CalendarDate, DateRange, PriceRecord, PriceSeries) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`source`] | Price source trait and fetch errors |
//! | [`stats`] | Descriptive statistics |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aurum_core::{CalendarDate, DateRange, NbpGoldAdapter, PriceSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = NbpGoldAdapter::default();
//!     let range = DateRange::new(
//!         CalendarDate::parse("2024-01-01")?,
//!         CalendarDate::parse("2024-03-01")?,
//!     );
//!
//!     let series = adapter.price_history(range).await?;
//!     println!("{} records", series.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fetching never panics: transport failures, non-2xx statuses, and malformed
//! payload records all surface as a [`FetchError`] with a stable code.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod source;
pub mod stats;

pub use adapters::NbpGoldAdapter;

pub use domain::{CalendarDate, DateRange, PriceRecord, PriceSeries};

pub use error::{CoreError, ValidationError};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use source::{FetchError, FetchErrorKind, FetchOutcome, PriceSource};

pub use stats::{round2, StatisticsSummary};
