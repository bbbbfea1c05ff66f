//! Orbit camera state and the eye-space transform pipeline.
//!
//! The camera itself never moves: the scene is translated and rotated in
//! front of it, including two fixed orientation corrections for the mesh.

/// Orbit state resource and the composed scene and mesh transforms.
pub mod orbit_camera;
