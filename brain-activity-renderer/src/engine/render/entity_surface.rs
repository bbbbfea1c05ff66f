use std::collections::HashMap;

use bevy::prelude::*;
use constants::render_settings::LABEL_FONT_SIZE;

use super::compositor::{DrawSurface, compose_frame};
use crate::engine::assets::scene_data::SceneData;
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::colormap::ActivityColour;

/// Retained entity that a frame's draw calls are applied to.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub enum SceneNode {
    BrainMesh,
    Electrode(String),
}

/// Screen-space label node tracking one electrode.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ElectrodeLabel(pub String);

/// Draw calls of one frame, keyed by electrode label.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub mesh: Option<Mat4>,
    pub spheres: HashMap<String, (Mat4, ActivityColour)>,
    pub labels: HashMap<String, (Vec3, String)>,
}

impl DrawSurface for FrameRecorder {
    fn clear(&mut self) {
        self.mesh = None;
        self.spheres.clear();
        self.labels.clear();
    }

    fn draw_mesh(&mut self, model: Mat4) {
        self.mesh = Some(model);
    }

    fn draw_sphere(&mut self, label: &str, model: Mat4, colour: ActivityColour) {
        self.spheres.insert(label.to_string(), (model, colour));
    }

    fn draw_text(&mut self, label: &str, anchor: Vec3, text: &str) {
        self.labels
            .insert(label.to_string(), (anchor, text.to_string()));
    }
}

/// Compose the frame and push it onto the mesh, marker and label entities.
pub fn composite_frame_system(
    camera: Res<OrbitCamera>,
    scene: Res<SceneData>,
    mut recorder: Local<FrameRecorder>,
    mut nodes: Query<(
        &SceneNode,
        &mut Transform,
        Option<&MeshMaterial3d<StandardMaterial>>,
    )>,
    mut labels: Query<(&ElectrodeLabel, &mut Node, &mut Text, &mut Visibility)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) {
    compose_frame(&camera, &scene, &mut *recorder);

    for (node, mut transform, material) in &mut nodes {
        let drawn = match node {
            SceneNode::BrainMesh => recorder.mesh.map(|model| (model, None)),
            SceneNode::Electrode(label) => recorder
                .spheres
                .get(label)
                .map(|(model, colour)| (*model, Some(*colour))),
        };
        let Some((model, colour)) = drawn else {
            continue;
        };

        *transform = Transform::from_matrix(model);

        if let (Some(colour), Some(material)) = (colour, material) {
            let colour = Color::from(colour);
            let stale = materials
                .get(material.0.id())
                .is_some_and(|current| current.base_color != colour);
            if stale {
                if let Some(current) = materials.get_mut(material.0.id()) {
                    current.base_color = colour;
                }
            }
        }
    }

    let view = cameras.single().ok();

    for (ElectrodeLabel(label), mut node, mut text, mut visibility) in &mut labels {
        let projected = view.and_then(|(view_camera, view_transform)| {
            let (anchor, content) = recorder.labels.get(label)?;
            view_camera
                .world_to_viewport(view_transform, *anchor)
                .ok()
                .map(|position| (position, content))
        });

        match projected {
            Some((position, content)) => {
                // Anchor marks the text baseline, as with raster text.
                node.left = Val::Px(position.x);
                node.top = Val::Px(position.y - LABEL_FONT_SIZE);
                if text.0 != *content {
                    text.0 = content.clone();
                }
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}
