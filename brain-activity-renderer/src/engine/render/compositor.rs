use bevy::prelude::*;
use constants::render_settings::LABEL_OFFSET;

use crate::engine::assets::scene_data::SceneData;
use crate::engine::camera::orbit_camera::{OrbitCamera, mesh_model_transform, scene_view_transform};
use crate::engine::colormap::{ActivityColour, activity_to_colour};

/// Immediate-mode drawing surface for one frame.
///
/// Transforms are eye-space: the camera sits at the origin looking down -Z.
pub trait DrawSurface {
    fn clear(&mut self) {}
    fn draw_mesh(&mut self, model: Mat4);
    fn draw_sphere(&mut self, label: &str, model: Mat4, colour: ActivityColour);
    fn draw_text(&mut self, label: &str, anchor: Vec3, text: &str);
    fn present(&mut self) {}
}

/// Label drawn next to an electrode, e.g. `F3: 0.8340`.
pub fn electrode_label(label: &str, activity: f32) -> String {
    format!("{label}: {activity:.4}")
}

/// Issue every draw call of one frame in layering order: mesh first, then
/// each electrode sphere followed by its label.
pub fn compose_frame(camera: &OrbitCamera, scene: &SceneData, surface: &mut impl DrawSurface) {
    let centre = scene.mesh_centre();
    let scene_view = scene_view_transform(camera, centre);

    surface.clear();
    surface.draw_mesh(mesh_model_transform(camera, centre));

    for electrode in scene.drawable_electrodes() {
        let colour = activity_to_colour(electrode.activity);
        surface.draw_sphere(
            electrode.label,
            scene_view * Mat4::from_translation(electrode.position),
            colour,
        );

        let anchor = scene_view.transform_point3(electrode.position + LABEL_OFFSET);
        surface.draw_text(
            electrode.label,
            anchor,
            &electrode_label(electrode.label, electrode.activity),
        );
    }

    surface.present();
}
