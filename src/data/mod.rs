mod av_quote;
mod error;
mod provider;

pub use {
    av_quote::{IntradayBar, IntradayResponse},
    error::FetchError,
    provider::{AlphaVantageProvider, QuoteProvider},
};
