use strum_macros::{Display, EnumIter, EnumString};

/// The fixed set of tickers offered by the dropdown.
///
/// The data layer accepts any string, so the enum is a UI concern only: it is
/// what the picker iterates over, not a gate on outbound requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Symbol {
    AAPL,
    MSFT,
    AMZN,
    GOOGL,
}
