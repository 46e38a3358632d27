use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::source::{FetchError, FetchOutcome, PriceSource};
use crate::{CalendarDate, DateRange, PriceRecord, PriceSeries};

const DEFAULT_BASE_URL: &str = "https://api.nbp.pl/api";
const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// NBP (Narodowy Bank Polski) gold price adapter.
///
/// Talks to the public `cenyzlota` endpoint, which answers a date-scoped GET
/// with a JSON array of `{ "data": "...", "cena": ... }` objects ordered by
/// ascending date.
#[derive(Clone)]
pub struct NbpGoldAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
}

impl Default for NbpGoldAdapter {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()))
    }
}

impl NbpGoldAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn history_url(&self, range: DateRange) -> String {
        format!(
            "{}/cenyzlota/{}/{}/",
            self.base_url, range.start, range.end
        )
    }

    async fn fetch_history(&self, range: DateRange) -> FetchOutcome {
        let url = self.history_url(range);
        debug!(%url, "fetching gold price history");

        let request = HttpRequest::get(&url)
            .with_header("accept", "application/json")
            .with_timeout_ms(REQUEST_TIMEOUT_MS);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| FetchError::transport(format!("nbp transport error: {}", e.message())))?;

        if !response.is_success() {
            return Err(FetchError::upstream_status(response.status));
        }

        let raw: Vec<RawGoldQuote> = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::malformed(format!("nbp payload is not a quote array: {e}")))?;

        let records = raw
            .into_iter()
            .map(normalize_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PriceSeries::new(range, records))
    }
}

impl PriceSource for NbpGoldAdapter {
    fn price_history<'a>(
        &'a self,
        range: DateRange,
    ) -> Pin<Box<dyn Future<Output = FetchOutcome> + Send + 'a>> {
        Box::pin(async move {
            let outcome = self.fetch_history(range).await;
            if let Err(error) = &outcome {
                warn!(code = error.code(), "gold price fetch failed: {}", error.message());
            }
            outcome
        })
    }
}

/// One upstream quote as it appears on the wire.
#[derive(Debug, Deserialize)]
struct RawGoldQuote {
    #[serde(rename = "data")]
    date: String,
    #[serde(rename = "cena")]
    price: RawPrice,
}

/// The upstream serializes `cena` as a JSON number, but the documented shape
/// is a string; both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

fn normalize_record(raw: RawGoldQuote) -> Result<PriceRecord, FetchError> {
    let date = CalendarDate::parse(&raw.date)
        .map_err(|_| FetchError::malformed(format!("malformed record date '{}'", raw.date)))?;

    let price = match raw.price {
        RawPrice::Number(value) => value,
        RawPrice::Text(text) => text.trim().parse::<f64>().map_err(|_| {
            FetchError::malformed(format!("malformed record price '{text}' on {date}"))
        })?,
    };

    PriceRecord::new(date, price)
        .map_err(|e| FetchError::malformed(format!("invalid record on {date}: {e}")))
}
