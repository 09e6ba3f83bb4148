use eframe::egui::{CentralPanel, ComboBox, Context, RichText, TopBottomPanel};
use strum::IntoEnumIterator;

use crate::app::{App, ViewState};
use crate::domain::Symbol;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let selected_text = match self.selected {
                        Some(symbol) => symbol.to_string(),
                        None => UI_TEXT.placeholder_select_stock.to_owned(),
                    };

                    let mut picked = None;
                    ComboBox::from_id_salt("symbol_picker")
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            for symbol in Symbol::iter() {
                                if ui
                                    .selectable_value(
                                        &mut self.selected,
                                        Some(symbol),
                                        symbol.to_string(),
                                    )
                                    .clicked()
                                {
                                    picked = Some(symbol);
                                }
                            }
                        });

                    // The fetch runs right here on the UI thread; the frame
                    // blocks until it finishes.
                    if let Some(symbol) = picked {
                        self.on_symbol_selected(symbol);
                    }

                    ui.add_space(12.0);
                    match &self.view {
                        ViewState::Idle => {}
                        ViewState::Rendered { label } => {
                            ui.label(
                                RichText::new(label.as_str())
                                    .strong()
                                    .color(UI_CONFIG.colors.heading),
                            );
                        }
                        ViewState::Error => {
                            ui.label(
                                RichText::new(UI_TEXT.error_retrieving_data)
                                    .color(UI_CONFIG.colors.error),
                            );
                        }
                    }
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match &self.chart {
                Some(chart) => {
                    ui.heading(
                        RichText::new(format!("{} {}", chart.symbol, UI_TEXT.plot_title_suffix))
                            .color(UI_CONFIG.colors.heading),
                    );
                    self.plot_view.show_price_plot(ui, chart);
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label(UI_TEXT.cp_pick_a_ticker);
                    });
                }
            });
    }
}
