//! Configuration module for the stock-glance application.

mod alpha_vantage;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use alpha_vantage::{ALPHA_VANTAGE, API_KEY_ENV, AlphaVantageConfig};
