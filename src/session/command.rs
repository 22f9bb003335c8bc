//! Discrete session operations.
//!
//! Key presses, UI toggles and programmatic calls all end up as a
//! [`SessionCommand`] handed to [`Session::execute`](super::Session::execute).

use super::mode::Mode;
use crate::environment::TimeOfDay;

/// A discrete operation the session can perform between frames.
///
/// ```ignore
/// session.execute(SessionCommand::ToggleMode);
/// session.execute(SessionCommand::SetTimeOfDay(TimeOfDay::Night));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    // ── Mode ────────────────────────────────────────────────────────
    /// Switch to the given mode. A no-op when already active.
    SetMode(Mode),
    /// Switch between drone and walk.
    ToggleMode,

    // ── Environment ─────────────────────────────────────────────────
    /// Set day or night.
    SetTimeOfDay(TimeOfDay),
    /// Flip between day and night.
    ToggleDayNight,

    // ── Camera ──────────────────────────────────────────────────────
    /// Return the active rig to its home pose and stop it.
    ResetCamera,

    // ── Collision ───────────────────────────────────────────────────
    /// Enable or disable collision queries.
    ToggleCollision,
}
