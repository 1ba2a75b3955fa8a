//! Main application entry point.
//!
//! Builds the native window options, optionally prints the startup
//! diagnostic line, and hands control to the eframe event loop. The
//! loop's result is the process exit status.

use eframe::egui;
use qt_template::diag;
use qt_template::ui::{TemplateApp, LABEL_TEXT, WINDOW_SIZE};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Must reach stdout before any window appears.
    if let Some(line) = diag::banner() {
        println!("{line}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(LABEL_TEXT)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    log::info!("starting event loop");
    eframe::run_native(
        "qt-template",
        native_options,
        Box::new(|cc| Box::new(TemplateApp::new(cc))),
    )
}
