use glam::{Vec2, Vec3};
use rustc_hash::FxHashSet;

/// Raw input state shared between event callbacks and the frame step.
///
/// Event handlers mutate it between frames; the session reads a
/// [`FrameInput`] snapshot once per frame, after which the accumulated
/// pointer delta is cleared.
#[derive(Debug, Default)]
pub struct InputState {
    /// Physical keys currently held down.
    held: FxHashSet<String>,
    /// Whether a pointer drag (look) is in progress.
    dragging: bool,
    /// Pointer movement accumulated since the last frame.
    pointer_delta: Vec2,
    /// Last cursor position, `None` until the first move event.
    last_cursor: Option<Vec2>,
}

impl InputState {
    /// Create an empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held. Returns `true` if it was not already held
    /// (i.e. this is not an auto-repeat).
    pub fn press(&mut self, key: &str) -> bool {
        if self.held.contains(key) {
            return false;
        }
        self.held.insert(key.to_owned())
    }

    /// Mark a key as released.
    pub fn release(&mut self, key: &str) {
        let _ = self.held.remove(key);
    }

    /// Release every held key.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Whether `key` is currently held.
    #[must_use]
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Start a pointer drag.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// End a pointer drag.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Whether a pointer drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Record a cursor position, accumulating the delta from the previous
    /// one. The first position only seeds the tracker.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        if let Some(last) = self.last_cursor {
            self.pointer_delta += position - last;
        }
        self.last_cursor = Some(position);
    }

    /// Pointer movement accumulated since the last [`end_frame`](Self::end_frame).
    #[must_use]
    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer_delta
    }

    /// Clear per-frame accumulators.
    pub fn end_frame(&mut self) {
        self.pointer_delta = Vec2::ZERO;
    }
}

/// Per-frame input snapshot consumed by the camera rigs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Sum of unit impulses from held movement keys, in camera-local axes
    /// (−Z forward, +X right, +Y up).
    pub impulse: Vec3,
    /// Whether the pointer-drag (look) flag is set.
    pub dragging: bool,
    /// Pointer movement since the previous frame, in pixels.
    pub pointer_delta: Vec2,
}

impl FrameInput {
    /// No keys held and no pointer activity.
    pub const IDLE: Self = Self {
        impulse: Vec3::ZERO,
        dragging: false,
        pointer_delta: Vec2::ZERO,
    };

    /// Snapshot with only movement impulse.
    #[must_use]
    pub fn moving(impulse: Vec3) -> Self {
        Self {
            impulse,
            ..Self::IDLE
        }
    }

    /// Snapshot of an active drag by `delta` pixels.
    #[must_use]
    pub fn dragging(delta: Vec2) -> Self {
        Self {
            dragging: true,
            pointer_delta: delta,
            ..Self::IDLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_reports_repeats() {
        let mut state = InputState::new();
        assert!(state.press("KeyW"));
        assert!(!state.press("KeyW"));
        assert!(state.is_held("KeyW"));

        state.release("KeyW");
        assert!(!state.is_held("KeyW"));
        assert!(state.press("KeyW"));
    }

    #[test]
    fn cursor_delta_accumulates_until_end_frame() {
        let mut state = InputState::new();
        state.cursor_moved(100.0, 100.0);
        assert_eq!(state.pointer_delta(), Vec2::ZERO);

        state.cursor_moved(110.0, 95.0);
        state.cursor_moved(115.0, 90.0);
        assert_eq!(state.pointer_delta(), Vec2::new(15.0, -10.0));

        state.end_frame();
        assert_eq!(state.pointer_delta(), Vec2::ZERO);
    }

    #[test]
    fn release_all_clears_held_keys() {
        let mut state = InputState::new();
        let _ = state.press("KeyW");
        let _ = state.press("KeyA");
        state.release_all();
        assert!(!state.is_held("KeyW"));
        assert!(!state.is_held("KeyA"));
    }
}
