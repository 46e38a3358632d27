//! Canonical domain types for the gold price pipeline.
//!
//! All models validate their invariants at construction time:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CalendarDate`] | ISO `YYYY-MM-DD` calendar date |
//! | [`DateRange`] | Requested start/end bounds |
//! | [`PriceRecord`] | One (date, price) observation, price > 0 |
//! | [`PriceSeries`] | Ordered per-request price history |

mod date;
mod models;

pub use date::CalendarDate;
pub use models::{DateRange, PriceRecord, PriceSeries};
