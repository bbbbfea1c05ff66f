use bevy::prelude::*;
use bevy::window::RequestRedraw;
use constants::camera::AUTO_ROTATION_STEP_DEGREES;

use crate::engine::camera::orbit_camera::OrbitCamera;

/// Fixed-tick yaw advance; runs regardless of pointer state.
pub fn auto_rotation_system(
    mut camera: ResMut<OrbitCamera>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    camera.rotation_y += AUTO_ROTATION_STEP_DEGREES;
    redraw.write(RequestRedraw);
}
