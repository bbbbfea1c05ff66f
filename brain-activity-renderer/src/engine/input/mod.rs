//! Pointer and keyboard handling for the orbit camera.
//!
//! Bevy input events are translated into [`interaction::InteractionEvent`]s
//! and fed through a small state machine that owns the drag state.

/// Button/pointer state machine that mutates the orbit camera.
pub mod interaction;

/// Bevy systems bridging window input events to the state machine.
pub mod systems;
