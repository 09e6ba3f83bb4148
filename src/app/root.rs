use eframe::{Frame, egui::Context};

use crate::{
    app::{ChartSeries, ViewState},
    data::{FetchError, QuoteProvider},
    domain::Symbol,
    ui::{PlotView, format_price, setup_custom_visuals},
    utils::TimeUtils,
};

pub struct App {
    pub(crate) selected: Option<Symbol>,
    pub(crate) view: ViewState,
    pub(crate) chart: Option<ChartSeries>,
    pub(crate) plot_view: PlotView,
    provider: Box<dyn QuoteProvider>,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, provider: Box<dyn QuoteProvider>) -> Self {
        Self::with_provider(provider)
    }

    pub(crate) fn with_provider(provider: Box<dyn QuoteProvider>) -> Self {
        Self {
            selected: None,
            view: ViewState::Idle,
            chart: None,
            plot_view: PlotView::new(),
            provider,
        }
    }

    /// Dropdown handler: fetch, filter to the last 30 minutes, update label
    /// and chart. The fetch blocks the frame; each selection is independent.
    pub(crate) fn on_symbol_selected(&mut self, symbol: Symbol) {
        let series = match self.provider.fetch_intraday(&symbol.to_string()) {
            Ok(series) => series,
            Err(err) => {
                match err {
                    // The provider's normal "no data for you" answer.
                    FetchError::DataUnavailable => log::info!("{symbol}: {err}"),
                    other => log::warn!("{symbol}: fetch failed: {other}"),
                }
                self.view = ViewState::Error;
                return;
            }
        };

        let window = series.last_window(TimeUtils::MS_IN_30_MIN);
        let Some(latest) = window.iter().max_by_key(|p| p.timestamp_ms) else {
            self.view = ViewState::Error;
            return;
        };

        self.view = ViewState::Rendered {
            label: format!("{}: {}", symbol, format_price(latest.close)),
        };
        self.chart = Some(ChartSeries::from_window(symbol, &window));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.render_top_panel(ctx);
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{QuotePoint, QuoteSeries};
    use crate::ui::UI_TEXT;

    /// Canned provider: answers every fetch from a fixed closure.
    struct Canned<F>(F);

    impl<F> QuoteProvider for Canned<F>
    where
        F: Fn(&str) -> Result<QuoteSeries, FetchError>,
    {
        fn fetch_intraday(&self, symbol: &str) -> Result<QuoteSeries, FetchError> {
            (self.0)(symbol)
        }
    }

    fn app_with<F>(respond: F) -> App
    where
        F: Fn(&str) -> Result<QuoteSeries, FetchError> + 'static,
    {
        App::with_provider(Box::new(Canned(respond)))
    }

    fn msft_series(points: &[(i64, f64)]) -> QuoteSeries {
        QuoteSeries::new(
            "MSFT".to_owned(),
            points
                .iter()
                .map(|&(timestamp_ms, close)| QuotePoint {
                    timestamp_ms,
                    close,
                })
                .collect(),
        )
    }

    #[test]
    fn selection_renders_latest_price_label() {
        let newest = 1_000 * TimeUtils::MS_IN_30_MIN;
        let mut app = app_with(move |_| {
            Ok(msft_series(&[
                (newest, 101.50),
                (newest - 35 * TimeUtils::MS_IN_MIN, 99.00),
            ]))
        });

        app.on_symbol_selected(Symbol::MSFT);

        assert_eq!(
            app.view,
            ViewState::Rendered {
                label: "MSFT: $101.50".to_owned()
            }
        );
        // The 35-minutes-old point fell out of the window.
        let chart = app.chart.as_ref().unwrap();
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.symbol, "MSFT");
    }

    #[test]
    fn fetch_failure_sets_error_and_keeps_chart() {
        let mut app = app_with(|_| Ok(msft_series(&[(60_000, 101.50)])));
        app.on_symbol_selected(Symbol::MSFT);
        let rendered_chart = app.chart.clone();
        assert!(rendered_chart.is_some());

        app.provider = Box::new(Canned(
            |_: &str| -> Result<QuoteSeries, FetchError> { Err(FetchError::DataUnavailable) },
        ));
        app.on_symbol_selected(Symbol::MSFT);

        assert_eq!(app.view, ViewState::Error);
        assert_eq!(app.chart, rendered_chart);
    }

    #[test]
    fn empty_series_routes_through_error_path() {
        let mut app = app_with(|_| Ok(msft_series(&[])));
        app.on_symbol_selected(Symbol::MSFT);
        assert_eq!(app.view, ViewState::Error);
        assert!(app.chart.is_none());
    }

    #[test]
    fn repeated_selection_is_idempotent() {
        let newest = 1_000 * TimeUtils::MS_IN_30_MIN;
        let mut app = app_with(move |_| {
            Ok(msft_series(&[
                (newest, 101.50),
                (newest - 10 * TimeUtils::MS_IN_MIN, 100.00),
            ]))
        });

        app.on_symbol_selected(Symbol::MSFT);
        let first_view = app.view.clone();
        let first_chart = app.chart.clone();

        app.on_symbol_selected(Symbol::MSFT);
        assert_eq!(app.view, first_view);
        assert_eq!(app.chart, first_chart);
    }

    #[test]
    fn error_label_is_the_fixed_literal() {
        assert_eq!(UI_TEXT.error_retrieving_data, "Error retrieving data.");
    }
}
