use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::session::SessionCommand;

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = ["KeyW", "ArrowUp"]
/// toggle_mode = ["KeyC"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the camera's local −Z.
    MoveForward,
    /// Move along the camera's local +Z.
    MoveBackward,
    /// Move along the camera's local −X.
    MoveLeft,
    /// Move along the camera's local +X.
    MoveRight,
    /// Rise along world +Y (drone mode only).
    MoveUp,
    /// Sink along world −Y (drone mode only).
    MoveDown,
    /// Switch between drone and walk mode.
    ToggleMode,
    /// Switch between day and night.
    ToggleDayNight,
    /// Return the active camera to its home pose.
    ResetCamera,
    /// Enable or disable collision blocking.
    ToggleCollision,
}

impl KeyAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::ToggleMode,
        Self::ToggleDayNight,
        Self::ResetCamera,
        Self::ToggleCollision,
    ];

    /// Unit impulse in camera-local axes for a held movement key, or `None`
    /// for discrete actions.
    ///
    /// The Y component is interpreted along world Y by the drone rig.
    #[must_use]
    pub fn impulse(self) -> Option<Vec3> {
        match self {
            Self::MoveForward => Some(Vec3::NEG_Z),
            Self::MoveBackward => Some(Vec3::Z),
            Self::MoveLeft => Some(Vec3::NEG_X),
            Self::MoveRight => Some(Vec3::X),
            Self::MoveUp => Some(Vec3::Y),
            Self::MoveDown => Some(Vec3::NEG_Y),
            _ => None,
        }
    }

    /// The session command triggered by pressing a discrete action.
    #[must_use]
    pub fn command(self) -> Option<SessionCommand> {
        match self {
            Self::ToggleMode => Some(SessionCommand::ToggleMode),
            Self::ToggleDayNight => Some(SessionCommand::ToggleDayNight),
            Self::ResetCamera => Some(SessionCommand::ResetCamera),
            Self::ToggleCollision => Some(SessionCommand::ToggleCollision),
            _ => None,
        }
    }
}
