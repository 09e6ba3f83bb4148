use std::ops::RangeInclusive;

use eframe::egui::{Ui, Vec2b};
use egui_plot::{Axis, AxisHints, HPlacement, Line, Plot, PlotPoints, VPlacement};

use crate::app::ChartSeries;
use crate::config::plot::PLOT_CONFIG;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_price;
use crate::utils::epoch_sec_to_clock;

#[derive(Default)]
pub(crate) struct PlotView;

// Helper to build the Time Axis: ticks are epoch seconds, shown as HH:MM
fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis)
        .formatter(|mark, _range| epoch_sec_to_clock(mark.value as i64))
        .placement(VPlacement::Bottom)
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|mark, _range| format_price(mark.value))
        .placement(HPlacement::Right)
}

// Padded view bounds around the window. None only for an empty series,
// which the controller never hands us.
fn calculate_view_bounds(
    points: &[[f64; 2]],
) -> Option<(RangeInclusive<f64>, RangeInclusive<f64>)> {
    let x_min = points.first()?[0];
    let x_max = points.last()?[0];

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in points {
        y_min = y_min.min(p[1]);
        y_max = y_max.max(p[1]);
    }

    let x_pad =
        ((x_max - x_min) * PLOT_CONFIG.plot_x_padding_pct).max(PLOT_CONFIG.min_x_pad_secs);
    let y_range = y_max - y_min;
    let y_pad = if y_range > 0.0 {
        y_range * PLOT_CONFIG.plot_y_padding_pct
    } else {
        // Flat price: pick a pad from the magnitude so the line stays centered.
        (y_max.abs() * PLOT_CONFIG.degenerate_y_pad_pct).max(1.0)
    };

    Some((
        (x_min - x_pad)..=(x_max + x_pad),
        (y_min - y_pad)..=(y_max + y_pad),
    ))
}

impl PlotView {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn show_price_plot(&self, ui: &mut Ui, series: &ChartSeries) {
        let bounds = calculate_view_bounds(&series.points);

        Plot::new("price_plot")
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_price_axis()])
            .label_formatter(|_, _| String::new())
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(Vec2b { x: false, y: false })
            .allow_zoom(Vec2b { x: false, y: false })
            .show(ui, move |plot_ui| {
                if let Some((x_bounds, y_bounds)) = bounds {
                    plot_ui.set_plot_bounds_x(x_bounds);
                    plot_ui.set_plot_bounds_y(y_bounds);
                }
                plot_ui.line(
                    Line::new(
                        series.symbol.clone(),
                        PlotPoints::new(series.points.clone()),
                    )
                    .color(PLOT_CONFIG.price_line_color)
                    .width(PLOT_CONFIG.price_line_width),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_pad_around_the_window() {
        let points = [[600.0, 99.0], [1200.0, 101.0]];
        let (x, y) = calculate_view_bounds(&points).unwrap();
        assert!(*x.start() < 600.0 && *x.end() > 1200.0);
        assert!(*y.start() < 99.0 && *y.end() > 101.0);
    }

    #[test]
    fn single_flat_point_still_gets_a_view() {
        let points = [[600.0, 100.0]];
        let (x, y) = calculate_view_bounds(&points).unwrap();
        assert!(x.end() - x.start() >= 2.0 * PLOT_CONFIG.min_x_pad_secs);
        assert!(y.end() > y.start());
    }

    #[test]
    fn empty_series_has_no_bounds() {
        assert!(calculate_view_bounds(&[]).is_none());
    }
}
