use thiserror::Error;

/// Failure kinds for one intraday fetch.
///
/// The UI collapses all of these into a single fixed label; the distinction
/// exists so transport faults can be logged instead of crashing the frame.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The response carried no usable intraday series. This is how the
    /// provider signals bad symbols, rate limiting, and auth failures alike.
    #[error("intraday series missing from provider response")]
    DataUnavailable,

    /// Connection, timeout, or other HTTP-level failure.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not valid JSON.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
