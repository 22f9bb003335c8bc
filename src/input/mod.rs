//! Input handling: event types, held-key and pointer state, and the input
//! processor that converts raw window events into per-frame input and
//! session commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into input state and commands.
pub mod processor;
/// Held keys, drag flag and pointer delta.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
pub use state::{FrameInput, InputState};
