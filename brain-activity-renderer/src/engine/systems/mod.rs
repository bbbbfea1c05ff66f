//! Runtime systems outside the input path.
//!
//! Auto-rotation ticks on the fixed schedule; the FPS overlay updates every frame.

/// Fixed-interval yaw advance of the orbit camera.
pub mod auto_rotation;

/// Frame-rate overlay driven by the frame time diagnostics.
pub mod fps_tracking;
