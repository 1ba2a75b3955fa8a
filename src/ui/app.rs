//! The application UI: one label filling the content area.
//!
//! This implementation uses eframe::App for window management and event
//! handling; the label itself is plain egui.

use eframe::egui::{CentralPanel, Context};
use eframe::{App, CreationContext, Frame};

/// Fixed text shown by the label, also used as the window title.
pub const LABEL_TEXT: &str = "Qt6 minimal template";

/// Fixed window extent in logical units, width then height.
pub const WINDOW_SIZE: [f32; 2] = [320.0, 120.0];

/// The template application: paints one label and nothing else.
#[derive(Default)]
pub struct TemplateApp {}

impl TemplateApp {
    /// Called by eframe during application initialization.
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Paints the label into the full content area.
    ///
    /// Kept separate from [`App::update`] so tests can drive it with a
    /// bare `egui::Context`, which needs no `eframe::Frame`.
    pub fn show(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(LABEL_TEXT);
            });
        });
    }
}

impl App for TemplateApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.show(ctx);
    }
}
