#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use data::{AlphaVantageProvider, FetchError, QuoteProvider};
pub use domain::{QuotePoint, QuoteSeries, Symbol};

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, provider: AlphaVantageProvider) -> App {
    App::new(cc, Box::new(provider))
}
