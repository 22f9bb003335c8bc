//! Converts raw platform events into held-key state and session commands.
//!
//! The `InputProcessor` owns all transient input state (held keys, pointer
//! tracking, drag flag) and the key-binding map. It sits between raw window
//! events and the [`Session`](crate::session::Session): continuous input
//! (movement keys, pointer drags) is read once per frame through
//! [`frame_input`](InputProcessor::frame_input), discrete key presses become
//! [`SessionCommand`]s immediately.

use glam::Vec3;

use super::event::{InputEvent, MouseButton};
use super::state::{FrameInput, InputState};
use crate::options::KeybindingOptions;
use crate::session::SessionCommand;

/// Converts raw window events into input state and [`SessionCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     session.execute(cmd);
/// }
///
/// // Once per redraw:
/// session.update(&input_processor.frame_input(), dt);
/// input_processor.end_frame();
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Held keys, drag flag and pointer delta.
    state: InputState,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Read-only access to the raw input state.
    #[must_use]
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held keys are released so a rebinding
    /// cannot leave a stale movement key stuck down.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.state.release_all();
    }

    /// Drop the drag flag without a button release, e.g. after a mode
    /// switch triggered from outside the processor.
    pub fn release_pointer(&mut self) {
        self.state.end_drag();
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SessionCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.state.cursor_moved(x, y);
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    if pressed {
                        self.state.begin_drag();
                    } else {
                        self.state.end_drag();
                    }
                }
                None
            }
            InputEvent::Key { code, pressed } => {
                self.handle_key(&code, pressed)
            }
            InputEvent::FocusLost => {
                self.state.release_all();
                self.state.end_drag();
                None
            }
        }
    }

    /// Key press/release: track held state, emit commands on fresh presses
    /// of discrete actions.
    fn handle_key(&mut self, code: &str, pressed: bool) -> Option<SessionCommand> {
        if !pressed {
            self.state.release(code);
            return None;
        }

        let fresh = self.state.press(code);
        let action = self.key_bindings.lookup(code)?;
        if !fresh {
            return None;
        }

        let command = action.command()?;
        if command == SessionCommand::ToggleMode {
            self.state.end_drag();
        }
        Some(command)
    }

    /// Snapshot the state the camera rigs consume this frame.
    #[must_use]
    pub fn frame_input(&self) -> FrameInput {
        let impulse = self
            .key_bindings
            .bindings
            .iter()
            .filter_map(|(action, keys)| {
                let impulse = action.impulse()?;
                keys.iter()
                    .any(|key| self.state.is_held(key))
                    .then_some(impulse)
            })
            .sum::<Vec3>();

        FrameInput {
            impulse,
            dragging: self.state.dragging(),
            pointer_delta: self.state.pointer_delta(),
        }
    }

    /// Clear per-frame accumulators after the session has updated.
    pub fn end_frame(&mut self) {
        self.state.end_frame();
    }
}
