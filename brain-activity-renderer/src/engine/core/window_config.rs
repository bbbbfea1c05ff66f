use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use constants::render_settings::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

pub fn create_window_config() -> Window {
    Window {
        title: WINDOW_TITLE.into(),
        resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
