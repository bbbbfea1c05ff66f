use bevy::prelude::*;

use brain_activity_renderer::engine::core::app_setup::create_app;
use brain_activity_renderer::engine::loading::scene_loader::{SceneSources, load_scene};

fn main() -> AppExit {
    // Build first so the log subscriber is installed before loading.
    let mut app = create_app();

    let sources = SceneSources::default();
    match load_scene(&sources) {
        Ok(scene) => {
            app.insert_resource(sources).insert_resource(scene);
            app.run()
        }
        Err(err) => {
            error!("{err}");
            AppExit::error()
        }
    }
}
