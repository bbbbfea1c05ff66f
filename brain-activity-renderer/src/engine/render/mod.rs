//! Per-frame scene composition.
//!
//! [`compositor`] issues the frame's draw calls against a [`compositor::DrawSurface`];
//! [`entity_surface`] is the Bevy-backed surface that applies them to
//! entities spawned once at startup.

pub mod compositor;
pub mod entity_surface;
