//! Startup loading of the mesh, electrode and activity sources.
//!
//! Everything here runs once before the window opens. Any failure is a
//! [`error::LoadError`] that the top-level driver turns into a non-zero exit.

/// Error taxonomy for unreadable or malformed inputs.
pub mod error;

/// OBJ parsing and corner expansion into an unwelded triangle list.
pub mod mesh_loader;

/// JSON parsing of electrode positions and activity values.
pub mod point_set_loader;

/// Orchestrates the loaders and the one-time registration pass.
pub mod scene_loader;
