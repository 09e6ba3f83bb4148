use std::time::Duration;

use crate::config::ALPHA_VANTAGE;
use crate::data::{FetchError, IntradayResponse};
use crate::domain::QuoteSeries;

/// Abstract interface for fetching intraday quotes.
///
/// The app owns a boxed provider so tests can drive the controller with a
/// canned implementation instead of the network.
pub trait QuoteProvider {
    /// One blocking request for the 1-minute series of `symbol`.
    ///
    /// The symbol is passed through as-is; membership in the supported set is
    /// the dropdown's concern, not the provider's.
    fn fetch_intraday(&self, symbol: &str) -> Result<QuoteSeries, FetchError>;
}

/// Alpha Vantage REST provider. The api key is injected at construction, not
/// read from the environment at call time.
pub struct AlphaVantageProvider {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
        }
    }
}

impl QuoteProvider for AlphaVantageProvider {
    fn fetch_intraday(&self, symbol: &str) -> Result<QuoteSeries, FetchError> {
        let response = self
            .client
            .get(ALPHA_VANTAGE.endpoint)
            .query(&[
                ("function", ALPHA_VANTAGE.query.function),
                ("symbol", symbol),
                ("interval", ALPHA_VANTAGE.query.interval),
                ("apikey", self.api_key.as_str()),
            ])
            .timeout(Duration::from_millis(ALPHA_VANTAGE.client.timeout_ms))
            .send()?;

        // Decode from text rather than response.json() so a non-JSON body
        // surfaces as Decode, distinct from transport failures.
        let body = response.text()?;
        let decoded: IntradayResponse = serde_json::from_str(&body)?;
        decoded.into_series(symbol)
    }
}
