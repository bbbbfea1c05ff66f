/// Starting distance along the view axis. More negative is further away.
pub const INITIAL_ZOOM: f32 = -2.5;

/// Degrees of orbit per pixel of pointer travel with the left button held.
pub const ORBIT_DEGREES_PER_PIXEL: f32 = 0.3;

/// View-axis travel per pixel of vertical pointer travel with the right button held.
pub const ZOOM_PER_PIXEL: f32 = 0.01;

/// Degrees added to the Y orbit on every auto-rotation tick.
pub const AUTO_ROTATION_STEP_DEGREES: f32 = 0.1;

/// Auto-rotation tick cadence in milliseconds.
pub const AUTO_ROTATION_INTERVAL_MS: u64 = 16;

/// Vertical field of view of the perspective projection.
pub const FIELD_OF_VIEW_DEGREES: f32 = 45.0;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;
