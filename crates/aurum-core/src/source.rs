//! Price source contract and fetch error taxonomy.
//!
//! [`PriceSource`] is the single seam between the rendering side and whatever
//! upstream delivers the price history. Implementations return a
//! [`PriceSeries`] or a [`FetchError`]; nothing escapes as a panic, including
//! malformed payload records.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{DateRange, PriceSeries};

/// Fetch failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport never produced a response (DNS, connect, timeout, body read).
    Transport,
    /// The upstream answered with a non-2xx status.
    UpstreamStatus,
    /// The upstream body or one of its records failed to parse.
    MalformedPayload,
}

/// Structured fetch error surfaced to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn upstream_status(status: u16) -> Self {
        Self {
            kind: FetchErrorKind::UpstreamStatus,
            message: format!("upstream returned status {status}"),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::MalformedPayload,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Transport => "fetch.transport",
            FetchErrorKind::UpstreamStatus => "fetch.upstream_status",
            FetchErrorKind::MalformedPayload => "fetch.malformed_payload",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

/// Per-request fetch result handed to the rendering adapter.
pub type FetchOutcome = Result<PriceSeries, FetchError>;

/// Source adapter contract.
///
/// One invocation performs exactly one upstream call; there is no caching, no
/// retry, and no shared state between invocations.
pub trait PriceSource: Send + Sync {
    /// Fetches the price history for the requested date bounds.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if:
    /// - The transport fails (connection, timeout, body read)
    /// - The upstream answers with a non-2xx status
    /// - The payload or any record in it is malformed
    fn price_history<'a>(
        &'a self,
        range: DateRange,
    ) -> Pin<Box<dyn Future<Output = FetchOutcome> + Send + 'a>>;
}
