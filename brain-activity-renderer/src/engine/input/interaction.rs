use bevy::prelude::*;
use constants::camera::{ORBIT_DEGREES_PER_PIXEL, ZOOM_PER_PIXEL};

use crate::engine::camera::orbit_camera::OrbitCamera;

/// Raw input, already in window pixel coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    ButtonPressed { button: MouseButton, position: Vec2 },
    ButtonReleased { button: MouseButton },
    PointerMoved { position: Vec2 },
    KeyPressed { key: KeyCode },
}

/// What the main loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResponse {
    Ignored,
    Redraw,
    Quit,
}

/// Pointer drag state machine. The only writer of [`OrbitCamera`] besides
/// the auto-rotation tick.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InteractionController {
    pub left_down: bool,
    pub right_down: bool,
    pub last_pointer: Vec2,
}

impl InteractionController {
    pub fn handle(&mut self, event: InteractionEvent, camera: &mut OrbitCamera) -> InteractionResponse {
        match event {
            InteractionEvent::ButtonPressed { button, position } => {
                match button {
                    MouseButton::Left => self.left_down = true,
                    MouseButton::Right => self.right_down = true,
                    _ => {}
                }
                self.last_pointer = position;
                InteractionResponse::Ignored
            }
            InteractionEvent::ButtonReleased { button } => {
                match button {
                    MouseButton::Left => self.left_down = false,
                    MouseButton::Right => self.right_down = false,
                    _ => {}
                }
                InteractionResponse::Ignored
            }
            InteractionEvent::PointerMoved { position } => {
                let delta = position - self.last_pointer;

                if self.left_down {
                    camera.rotate_x += delta.y * ORBIT_DEGREES_PER_PIXEL;
                    camera.rotation_y += delta.x * ORBIT_DEGREES_PER_PIXEL;
                }
                if self.right_down {
                    camera.zoom += delta.y * ZOOM_PER_PIXEL;
                }

                self.last_pointer = position;
                InteractionResponse::Redraw
            }
            InteractionEvent::KeyPressed { key } => {
                if key == KeyCode::Escape {
                    InteractionResponse::Quit
                } else {
                    InteractionResponse::Redraw
                }
            }
        }
    }
}
