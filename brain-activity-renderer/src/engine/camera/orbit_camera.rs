use bevy::prelude::*;
use constants::camera::INITIAL_ZOOM;
use constants::coordinate_system::{
    MESH_ORIENTATION_CORRECTION_DEGREES, ORBIT_ORIENTATION_CORRECTION_DEGREES,
    ORIENTATION_CORRECTION_AXIS,
};

/// Orbit state driven by pointer input and the auto-rotation tick.
///
/// Angles are in degrees and accumulate without bound; they wrap through the
/// rotation itself. `zoom` is the translation along the view axis and may
/// pass through the model.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub rotate_x: f32,
    pub rotation_y: f32,
    pub zoom: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            rotate_x: 0.0,
            rotation_y: 0.0,
            zoom: INITIAL_ZOOM,
        }
    }
}

impl OrbitCamera {
    /// Pull back along the view axis, then pitch, then yaw.
    pub fn orbit_transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.zoom))
            * Mat4::from_rotation_x(self.rotate_x.to_radians())
            * Mat4::from_rotation_y(self.rotation_y.to_radians())
    }
}

/// Flip applied in orbit space, after the user orbit and before re-centring.
pub fn orbit_orientation_correction() -> Mat4 {
    Mat4::from_axis_angle(
        ORIENTATION_CORRECTION_AXIS,
        ORBIT_ORIENTATION_CORRECTION_DEGREES.to_radians(),
    )
}

/// Flip of the mesh about its own bounds centre, layered under the scene view.
pub fn mesh_orientation_correction(mesh_centre: Vec3) -> Mat4 {
    Mat4::from_translation(mesh_centre)
        * Mat4::from_axis_angle(
            ORIENTATION_CORRECTION_AXIS,
            MESH_ORIENTATION_CORRECTION_DEGREES.to_radians(),
        )
        * Mat4::from_translation(-mesh_centre)
}

/// Eye-space transform of mesh-space points: orbit, correct, re-centre.
pub fn scene_view_transform(camera: &OrbitCamera, mesh_centre: Vec3) -> Mat4 {
    camera.orbit_transform() * orbit_orientation_correction() * Mat4::from_translation(-mesh_centre)
}

/// Eye-space transform of mesh vertices, including the mesh-local flip.
pub fn mesh_model_transform(camera: &OrbitCamera, mesh_centre: Vec3) -> Mat4 {
    scene_view_transform(camera, mesh_centre) * mesh_orientation_correction(mesh_centre)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_point(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).abs().max_element() < TOLERANCE,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn test_default_camera_sits_back_from_the_model() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.rotate_x, 0.0);
        assert_eq!(camera.rotation_y, 0.0);
        assert_eq!(camera.zoom, -2.5);
    }

    #[test]
    fn test_mesh_centre_lands_on_view_axis_for_any_orbit() {
        let centre = Vec3::new(12.0, -3.0, 40.0);
        for (rotate_x, rotation_y) in [(0.0, 0.0), (35.0, -120.0), (720.5, 91.0)] {
            let camera = OrbitCamera {
                rotate_x,
                rotation_y,
                zoom: -4.0,
            };
            let eye = scene_view_transform(&camera, centre).transform_point3(centre);
            assert_point(eye, Vec3::new(0.0, 0.0, -4.0));
        }
    }

    #[test]
    fn test_orbit_correction_flips_up_and_depth() {
        let flipped = orbit_orientation_correction().transform_point3(Vec3::new(1.0, 2.0, 3.0));
        assert_point(flipped, Vec3::new(1.0, -2.0, -3.0));
    }

    #[test]
    fn test_mesh_correction_pivots_on_centre() {
        let centre = Vec3::new(5.0, 5.0, 5.0);
        let correction = mesh_orientation_correction(centre);

        assert_point(correction.transform_point3(centre), centre);
        assert_point(
            correction.transform_point3(Vec3::new(6.0, 7.0, 8.0)),
            Vec3::new(6.0, 3.0, 2.0),
        );
    }

    #[test]
    fn test_corrections_stay_distinct_off_origin() {
        let centre = Vec3::new(0.0, 2.0, 1.0);
        let point = Vec3::new(1.0, 3.0, 4.0);

        let about_origin = orbit_orientation_correction().transform_point3(point);
        let about_centre = mesh_orientation_correction(centre).transform_point3(point);

        assert!((about_origin - about_centre).length() > 1.0);
    }

    #[test]
    fn test_mesh_vertices_see_both_flips() {
        let camera = OrbitCamera::default();
        let centre = Vec3::new(1.0, 1.0, 1.0);
        let vertex = Vec3::new(2.0, 3.0, 1.0);

        // Two half turns about X cancel, leaving the re-centred vertex.
        let eye = mesh_model_transform(&camera, centre).transform_point3(vertex);
        assert_point(eye, Vec3::new(1.0, 2.0, -2.5));

        // Electrodes only get the orbit-space flip.
        let electrode = scene_view_transform(&camera, centre).transform_point3(vertex);
        assert_point(electrode, Vec3::new(1.0, -2.0, -2.5));
    }

    #[test]
    fn test_positive_pitch_tilts_top_towards_viewer() {
        let camera = OrbitCamera {
            rotate_x: 90.0,
            rotation_y: 0.0,
            zoom: 0.0,
        };
        let up = camera.orbit_transform().transform_point3(Vec3::Y);
        assert_point(up, Vec3::Z);
    }

    #[test]
    fn test_yaw_wraps_through_full_turns() {
        let base = OrbitCamera::default();
        let wrapped = OrbitCamera {
            rotation_y: base.rotation_y + 360.0 * 3.0,
            ..base
        };
        let point = Vec3::new(0.3, -0.2, 0.7);
        assert_point(
            wrapped.orbit_transform().transform_point3(point),
            base.orbit_transform().transform_point3(point),
        );
    }
}
