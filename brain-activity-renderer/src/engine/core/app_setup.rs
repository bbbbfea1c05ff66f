use std::time::Duration;

use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};
use constants::camera::AUTO_ROTATION_INTERVAL_MS;
use constants::render_settings::{AMBIENT_BRIGHTNESS, CLEAR_COLOUR};

use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::interaction::InteractionController;
use crate::engine::input::systems::window_input_system;
use crate::engine::render::entity_surface::composite_frame_system;
use crate::engine::scene::spawn::setup_scene;
use crate::engine::systems::auto_rotation::auto_rotation_system;
use crate::engine::systems::fps_tracking::fps_overlay_system;

/// Build the app with plugins, resources and schedules.
///
/// `SceneData` is not inserted here; the caller loads it and inserts it
/// before `run`, since `setup_scene` needs it at startup.
pub fn create_app() -> App {
    let mut app = App::new();

    let tick = Duration::from_millis(AUTO_ROTATION_INTERVAL_MS);

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(ClearColor(CLEAR_COLOUR))
        .insert_resource(AmbientLight {
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        })
        .insert_resource(Time::<Fixed>::from_duration(tick))
        // Sleep between input events, but wake at least once per rotation tick.
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive(tick),
            unfocused_mode: UpdateMode::reactive(tick),
        })
        .init_resource::<OrbitCamera>()
        .init_resource::<InteractionController>();

    app.add_systems(Startup, setup_scene)
        .add_systems(FixedUpdate, auto_rotation_system)
        .add_systems(
            Update,
            (window_input_system, composite_frame_system).chain(),
        )
        .add_systems(Update, fps_overlay_system);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
