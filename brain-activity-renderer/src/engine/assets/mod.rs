//! Loaded scene datasets and their spatial bounds.
//!
//! Holds the anatomical mesh, electrode sites and activity values once they
//! have been parsed and registered into a common coordinate frame.

/// Normalised activity values keyed by electrode label.
pub mod activity;

/// Axis-aligned bounding boxes folded from point samples.
pub mod bounds;

/// Unwelded triangle mesh of the cortex surface.
pub mod brain_mesh;

/// Electrode positions and their electrode-space bounds.
pub mod electrodes;

/// Render-owned bundle of every dataset plus the draw filter.
pub mod scene_data;
