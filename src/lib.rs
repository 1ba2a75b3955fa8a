//! Minimal desktop template: one fixed-size label window and an optional
//! startup diagnostic line, gated by the `diag` cargo feature.

pub mod diag;
pub mod ui;
