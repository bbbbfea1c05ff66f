use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::{FPS_FONT_SIZE, FPS_TEXT_COLOUR};

/// Marker for the frame-rate overlay text.
#[derive(Component)]
pub struct FpsText;

pub fn spawn_fps_overlay(commands: &mut Commands) {
    commands.spawn((
        Text::new(fps_overlay_text(None)),
        TextFont {
            font_size: FPS_FONT_SIZE,
            ..default()
        },
        TextColor(FPS_TEXT_COLOUR),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

/// Overlay text for a smoothed frame rate; a placeholder until the
/// diagnostic has history.
pub fn fps_overlay_text(smoothed: Option<f64>) -> String {
    match smoothed {
        Some(fps) => format!("FPS: {fps:.0}"),
        None => "FPS: --".to_string(),
    }
}

/// Refresh the overlay only when the displayed value changes.
pub fn fps_overlay_system(
    diagnostics: Res<DiagnosticsStore>,
    mut overlays: Query<&mut Text, With<FpsText>>,
) {
    let smoothed = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|diagnostic| diagnostic.smoothed());
    let content = fps_overlay_text(smoothed);

    for mut text in &mut overlays {
        if text.0 != content {
            text.0.clone_from(&content);
        }
    }
}
