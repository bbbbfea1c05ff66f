use bevy::color::Color;
use bevy::math::Vec3;

pub const WINDOW_TITLE: &str = "3D Brain Activity Visualizer";
pub const WINDOW_WIDTH: f32 = 1000.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

pub const CLEAR_COLOUR: Color = Color::srgb(1.0, 1.0, 1.0);

/// Soft pink used for the cortex surface.
pub const MESH_COLOUR: Color = Color::srgb(0.86, 0.72, 0.72);

pub const ELECTRODE_SPHERE_RADIUS: f32 = 0.01;
pub const ELECTRODE_SPHERE_SECTORS: u32 = 16;
pub const ELECTRODE_SPHERE_STACKS: u32 = 16;

/// Mesh-space offset of an electrode label from its sphere centre.
pub const LABEL_OFFSET: Vec3 = Vec3::new(0.025, 0.012, 0.0);
pub const LABEL_COLOUR: Color = Color::srgb(0.0, 0.0, 0.0);
pub const LABEL_FONT_SIZE: f32 = 12.0;

/// Eye-space position of the single point light.
pub const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 2.0);
pub const LIGHT_INTENSITY: f32 = 100_000.0;
pub const LIGHT_RANGE: f32 = 50.0;

/// Ambient fill so the unlit side of the cortex keeps roughly 30% of its colour.
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

pub const FPS_FONT_SIZE: f32 = 16.0;
pub const FPS_TEXT_COLOUR: Color = Color::srgb(1.0, 0.0, 0.0);
