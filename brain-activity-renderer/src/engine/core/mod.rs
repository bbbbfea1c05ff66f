//! Core application setup.
//!
//! Handles plugin initialisation, window configuration and schedule wiring.

/// `create_app`: window and asset plugins, frame diagnostics, the 16 ms
/// rotation tick and the per-frame input then compositing chain.
pub mod app_setup;

/// Primary window title, size and present mode.
pub mod window_config;
