pub mod assets;
pub mod camera;
pub mod colormap;
pub mod core;
pub mod input;
pub mod loading;
pub mod registration;
pub mod render;
pub mod scene;
pub mod systems;
