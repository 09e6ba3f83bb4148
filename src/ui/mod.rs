mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_text;
mod utils;

pub use ui_text::UI_TEXT;

pub(crate) use ui_config::{UI_CONFIG, setup_custom_visuals};
pub(crate) use ui_plot_view::PlotView;
pub(crate) use utils::format_price;
