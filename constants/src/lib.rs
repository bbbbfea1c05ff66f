//! Shared tunables for the brain activity renderer.
//!
//! Input paths, render surface settings, camera and input sensitivities, and
//! the coordinate conventions of the anatomical mesh asset.

pub mod camera;
pub mod coordinate_system;
pub mod paths;
pub mod render_settings;
