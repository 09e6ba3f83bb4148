#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window

use std::{env, panic};

use eframe::NativeOptions;

use stock_glance::{AlphaVantageProvider, config::API_KEY_ENV, run_app, ui::UI_TEXT};

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("stock_glance"), my_code_level)
        .init();

    // Secrets come from .env / the environment. A missing key is passed along
    // as-is; the provider answers with an error payload and the UI shows the
    // standard error label.
    dotenvy::dotenv().ok();
    let api_key = env::var(API_KEY_ENV).unwrap_or_else(|_| {
        log::warn!("{API_KEY_ENV} is not set; every quote request will fail provider auth");
        String::new()
    });
    let provider = AlphaVantageProvider::new(api_key);

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 520.0])
            .with_title(UI_TEXT.app_title),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, provider)))),
    )
}
