use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::{RequestRedraw, WindowEvent};

use super::interaction::{InteractionController, InteractionEvent, InteractionResponse};
use crate::engine::camera::orbit_camera::OrbitCamera;

/// Map one window event onto the state machine's vocabulary.
///
/// Presses take the position of the last `CursorMoved` seen, so a press and
/// a move in the same frame still form a drag.
fn to_interaction(event: &WindowEvent, last_pointer: Vec2) -> Option<InteractionEvent> {
    match event {
        WindowEvent::MouseButtonInput(input) => Some(match input.state {
            ButtonState::Pressed => InteractionEvent::ButtonPressed {
                button: input.button,
                position: last_pointer,
            },
            ButtonState::Released => InteractionEvent::ButtonReleased {
                button: input.button,
            },
        }),
        WindowEvent::CursorMoved(moved) => Some(InteractionEvent::PointerMoved {
            position: moved.position,
        }),
        WindowEvent::KeyboardInput(key) if key.state == ButtonState::Pressed => {
            Some(InteractionEvent::KeyPressed { key: key.key_code })
        }
        _ => None,
    }
}

/// Feed buttons, cursor motion and keys through the interaction controller
/// in the order the window delivered them.
///
/// `Redraw` becomes a `RequestRedraw`, `Quit` a clean `AppExit::Success`.
pub fn window_input_system(
    mut controller: ResMut<InteractionController>,
    mut camera: ResMut<OrbitCamera>,
    mut window_events: EventReader<WindowEvent>,
    mut redraw: EventWriter<RequestRedraw>,
    mut exit: EventWriter<AppExit>,
) {
    for event in window_events.read() {
        let Some(interaction) = to_interaction(event, controller.last_pointer) else {
            continue;
        };

        match controller.handle(interaction, &mut camera) {
            InteractionResponse::Ignored => {}
            InteractionResponse::Redraw => {
                redraw.write(RequestRedraw);
            }
            InteractionResponse::Quit => {
                info!("Quit requested");
                exit.write(AppExit::Success);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::input::keyboard::{Key, KeyboardInput};
    use bevy::input::mouse::MouseButtonInput;

    fn input_world() -> World {
        let mut world = World::new();
        world.init_resource::<InteractionController>();
        world.init_resource::<OrbitCamera>();
        world.init_resource::<Events<WindowEvent>>();
        world.init_resource::<Events<RequestRedraw>>();
        world.init_resource::<Events<AppExit>>();
        world
    }

    fn button(world: &mut World, button: MouseButton, state: ButtonState) {
        world.send_event(WindowEvent::MouseButtonInput(MouseButtonInput {
            button,
            state,
            window: Entity::PLACEHOLDER,
        }));
    }

    fn cursor(world: &mut World, x: f32, y: f32) {
        world.send_event(WindowEvent::CursorMoved(CursorMoved {
            window: Entity::PLACEHOLDER,
            position: Vec2::new(x, y),
            delta: None,
        }));
    }

    fn key(world: &mut World, key_code: KeyCode, logical_key: Key) {
        world.send_event(WindowEvent::KeyboardInput(KeyboardInput {
            key_code,
            logical_key,
            state: ButtonState::Pressed,
            text: None,
            repeat: false,
            window: Entity::PLACEHOLDER,
        }));
    }

    #[test]
    fn test_drag_events_orbit_the_camera() {
        let mut world = input_world();
        world.resource_mut::<InteractionController>().last_pointer = Vec2::new(50.0, 50.0);
        button(&mut world, MouseButton::Left, ButtonState::Pressed);
        cursor(&mut world, 60.0, 50.0);

        world.run_system_once(window_input_system).unwrap();

        let camera = world.resource::<OrbitCamera>();
        assert!((camera.rotation_y - 3.0).abs() < 1e-5);
        assert_eq!(world.resource::<Events<RequestRedraw>>().len(), 1);
    }

    #[test]
    fn test_same_frame_events_keep_arrival_order() {
        let mut world = input_world();
        button(&mut world, MouseButton::Left, ButtonState::Pressed);
        cursor(&mut world, 10.0, 0.0);
        button(&mut world, MouseButton::Left, ButtonState::Released);
        cursor(&mut world, 20.0, 0.0);

        world.run_system_once(window_input_system).unwrap();

        let camera = *world.resource::<OrbitCamera>();
        assert!((camera.rotation_y - 3.0).abs() < 1e-5);
        assert_eq!(camera.rotate_x, 0.0);

        let controller = world.resource::<InteractionController>();
        assert!(!controller.left_down);
        assert_eq!(controller.last_pointer, Vec2::new(20.0, 0.0));
        assert_eq!(world.resource::<Events<RequestRedraw>>().len(), 2);
    }

    #[test]
    fn test_press_anchors_at_the_preceding_cursor_move() {
        let mut world = input_world();
        cursor(&mut world, 100.0, 40.0);
        button(&mut world, MouseButton::Right, ButtonState::Pressed);
        cursor(&mut world, 100.0, 90.0);

        world.run_system_once(window_input_system).unwrap();

        let camera = world.resource::<OrbitCamera>();
        // Only the 50px after the press counts, not the move that placed the cursor.
        assert!((camera.zoom - (-2.5 + 0.5)).abs() < 1e-5);
        assert_eq!(camera.rotation_y, 0.0);
    }

    #[test]
    fn test_escape_writes_app_exit() {
        let mut world = input_world();
        key(&mut world, KeyCode::Escape, Key::Escape);

        world.run_system_once(window_input_system).unwrap();

        let exits = world.resource::<Events<AppExit>>();
        assert_eq!(exits.len(), 1);
        assert_eq!(world.resource::<Events<RequestRedraw>>().len(), 0);
    }

    #[test]
    fn test_other_keys_only_redraw() {
        let mut world = input_world();
        key(&mut world, KeyCode::Space, Key::Space);

        world.run_system_once(window_input_system).unwrap();

        assert!(world.resource::<Events<AppExit>>().is_empty());
        assert_eq!(world.resource::<Events<RequestRedraw>>().len(), 1);
    }
}
