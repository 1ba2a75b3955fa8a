//! UI module: the single-label application window.

pub mod app;

pub use app::{TemplateApp, LABEL_TEXT, WINDOW_SIZE};
