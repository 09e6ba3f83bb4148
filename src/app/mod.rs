mod root;
mod state;

pub(crate) use state::{ChartSeries, ViewState};

pub use root::App;
