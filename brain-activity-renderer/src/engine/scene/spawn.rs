use bevy::prelude::*;
use constants::camera::{FAR_PLANE, FIELD_OF_VIEW_DEGREES, NEAR_PLANE};
use constants::render_settings::{
    ELECTRODE_SPHERE_RADIUS, ELECTRODE_SPHERE_SECTORS, ELECTRODE_SPHERE_STACKS, LABEL_COLOUR,
    LABEL_FONT_SIZE, LIGHT_INTENSITY, LIGHT_POSITION, LIGHT_RANGE, MESH_COLOUR,
};

use crate::engine::assets::scene_data::SceneData;
use crate::engine::colormap::activity_to_colour;
use crate::engine::render::entity_surface::{ElectrodeLabel, SceneNode};
use crate::engine::systems::fps_tracking::spawn_fps_overlay;

/// Startup system: camera, light, brain mesh, one marker and label per drawable electrode.
///
/// Transforms are left at identity here; the compositor places everything on
/// the first frame.
pub fn setup_scene(
    mut commands: Commands,
    scene: Res<SceneData>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);

    commands.spawn((
        Mesh3d(meshes.add(scene.mesh.to_render_mesh())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: MESH_COLOUR,
            cull_mode: None,
            double_sided: true,
            ..default()
        })),
        Transform::default(),
        SceneNode::BrainMesh,
    ));

    let sphere = meshes.add(
        Sphere::new(ELECTRODE_SPHERE_RADIUS)
            .mesh()
            .uv(ELECTRODE_SPHERE_SECTORS, ELECTRODE_SPHERE_STACKS),
    );

    let mut spawned = 0usize;
    for electrode in scene.drawable_electrodes() {
        commands.spawn((
            Mesh3d(sphere.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: activity_to_colour(electrode.activity).into(),
                ..default()
            })),
            Transform::default(),
            SceneNode::Electrode(electrode.label.to_string()),
        ));

        commands.spawn((
            Text::new(""),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(LABEL_COLOUR),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            ElectrodeLabel(electrode.label.to_string()),
        ));
        spawned += 1;
    }

    info!(
        "Scene ready: {} triangles, {} electrode markers",
        scene.mesh.triangle_count(),
        spawned
    );

    spawn_fps_overlay(&mut commands);
}

fn spawn_camera(commands: &mut Commands) {
    // Fixed at the origin looking down -Z; the scene carries the orbit.
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FIELD_OF_VIEW_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::IDENTITY,
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        PointLight {
            intensity: LIGHT_INTENSITY,
            range: LIGHT_RANGE,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION),
    ));
}
