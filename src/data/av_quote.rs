use std::collections::BTreeMap;

use serde::Deserialize;

use crate::data::FetchError;
use crate::domain::{QuotePoint, QuoteSeries};
use crate::utils::parse_quote_timestamp;

/// Wire format of an Alpha Vantage TIME_SERIES_INTRADAY response.
///
/// Error and rate-limit payloads omit the series key entirely, so it decodes
/// as `None` rather than failing; everything else in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct IntradayResponse {
    #[serde(rename = "Time Series (1min)")]
    pub series: Option<BTreeMap<String, IntradayBar>>,
}

/// One minute-bar as the provider encodes it: every field a decimal string.
/// Only the close is required here.
#[derive(Debug, Deserialize)]
pub struct IntradayBar {
    #[serde(rename = "1. open")]
    pub open: Option<String>,
    #[serde(rename = "2. high")]
    pub high: Option<String>,
    #[serde(rename = "3. low")]
    pub low: Option<String>,
    #[serde(rename = "4. close")]
    pub close: String,
    #[serde(rename = "5. volume")]
    pub volume: Option<String>,
}

impl IntradayResponse {
    /// Typed reshape into the domain series.
    ///
    /// Never returns a partially-valid structure: a missing series key, or a
    /// series that yields zero parseable points, is `DataUnavailable`.
    /// Individual bars that fail to parse are skipped.
    pub fn into_series(self, symbol: &str) -> Result<QuoteSeries, FetchError> {
        let Some(bars) = self.series else {
            log::info!("{symbol}: response carries no intraday series");
            return Err(FetchError::DataUnavailable);
        };

        let mut points = Vec::with_capacity(bars.len());
        for (stamp, bar) in bars {
            let Some(timestamp_ms) = parse_quote_timestamp(&stamp) else {
                log::warn!("{symbol}: skipping bar with unparseable timestamp {stamp:?}");
                continue;
            };
            let close = match bar.close.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    log::warn!("{symbol}: skipping bar {stamp} with bad close {:?}", bar.close);
                    continue;
                }
            };
            points.push(QuotePoint {
                timestamp_ms,
                close,
            });
        }

        if points.is_empty() {
            log::info!("{symbol}: intraday series present but empty");
            return Err(FetchError::DataUnavailable);
        }
        Ok(QuoteSeries::new(symbol.to_owned(), points))
    }
}
