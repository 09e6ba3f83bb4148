//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // PRICE LINE
    pub price_line_color: Color32,
    pub price_line_width: f32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_x_padding_pct: f64,

    /// Fallback half-height when the window holds a single flat price.
    pub degenerate_y_pad_pct: f64,
    /// Minimum horizontal padding in seconds (keeps a one-point window visible).
    pub min_x_pad_secs: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(255, 215, 0), // Gold
    price_line_width: 2.0,

    plot_y_padding_pct: 0.05,
    plot_x_padding_pct: 0.02,

    degenerate_y_pad_pct: 0.01,
    min_x_pad_secs: 30.0,
};
