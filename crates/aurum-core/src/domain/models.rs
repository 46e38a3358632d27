use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ValidationError};

/// Requested date bounds for a fetch.
///
/// Ordering is deliberately not enforced: an inverted range is forwarded to
/// the upstream API, which answers with whatever it considers in range
/// (usually nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DateRange {
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }
}

/// Single (date, price) observation from the upstream price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: CalendarDate,
    pub price: f64,
}

impl PriceRecord {
    pub fn new(date: CalendarDate, price: f64) -> Result<Self, ValidationError> {
        if !price.is_finite() {
            return Err(ValidationError::NonFinitePrice { value: price });
        }
        if price <= 0.0 {
            return Err(ValidationError::NonPositivePrice { value: price });
        }

        Ok(Self { date, price })
    }
}

/// Ordered price history for one requested period.
///
/// Record order is upstream-provided (ascending by date) and never re-sorted.
/// A series is built fresh per request and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    period: DateRange,
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    pub fn new(period: DateRange, records: Vec<PriceRecord>) -> Self {
        Self { period, records }
    }

    pub const fn period(&self) -> DateRange {
        self.period
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.price).collect()
    }
}
