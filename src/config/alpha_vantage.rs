/// Fixed query parameters for the intraday lookup. The symbol and the api key
/// are the only per-request values.
pub struct QueryDefaults {
    pub function: &'static str,
    pub interval: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
}

pub struct AlphaVantageConfig {
    pub endpoint: &'static str,
    pub query: QueryDefaults,
    pub client: ClientDefaults,
}

/// Environment variable holding the Alpha Vantage api key.
pub const API_KEY_ENV: &str = "AV_apis_key";

pub const ALPHA_VANTAGE: AlphaVantageConfig = AlphaVantageConfig {
    endpoint: "https://www.alphavantage.co/query",
    query: QueryDefaults {
        function: "TIME_SERIES_INTRADAY",
        interval: "1min",
    },
    client: ClientDefaults { timeout_ms: 10_000 },
};
