/// Every user-facing string in one place.
pub struct UiText {
    pub app_title: &'static str,

    // --- Top panel ---
    pub placeholder_select_stock: &'static str,
    pub error_retrieving_data: &'static str,

    // --- PLOT LABELS ---
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub plot_title_suffix: &'static str,

    // Center panel
    pub cp_pick_a_ticker: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Stock Glance",

    placeholder_select_stock: "select stock",
    error_retrieving_data: "Error retrieving data.",

    plot_x_axis: "Time",
    plot_y_axis: "Price",
    plot_title_suffix: "Price",

    cp_pick_a_ticker: "Pick a ticker above to chart the last 30 minutes",
};
