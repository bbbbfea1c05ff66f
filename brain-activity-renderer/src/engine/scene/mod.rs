//! Scene construction.

/// Startup spawning of the camera, light, brain mesh and electrode entities.
pub mod spawn;
