use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// An action may be bound to several keys (e.g. `KeyW` and `ArrowUp`).
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `MoveForward` → `["KeyW"]`).
    pub bindings: HashMap<KeyAction, Vec<String>>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let keys = |names: &[&str]| -> Vec<String> {
            names.iter().map(|&name| name.to_owned()).collect()
        };
        let bindings = HashMap::from([
            (KeyAction::MoveForward, keys(&["KeyW", "ArrowUp"])),
            (KeyAction::MoveBackward, keys(&["KeyS", "ArrowDown"])),
            (KeyAction::MoveLeft, keys(&["KeyA", "ArrowLeft"])),
            (KeyAction::MoveRight, keys(&["KeyD", "ArrowRight"])),
            (KeyAction::MoveUp, keys(&["KeyE", "Space"])),
            (KeyAction::MoveDown, keys(&["KeyQ", "ShiftLeft"])),
            (KeyAction::ToggleMode, keys(&["KeyC"])),
            (KeyAction::ToggleDayNight, keys(&["KeyN"])),
            (KeyAction::ResetCamera, keys(&["KeyR"])),
            (KeyAction::ToggleCollision, keys(&["KeyK"])),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// A key bound to two actions keeps whichever is visited last; the
    /// conflict is logged.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, keys) in &self.bindings {
            for key in keys {
                if let Some(previous) =
                    self.key_to_action.insert(key.clone(), *action)
                {
                    log::warn!(
                        "key {key} bound to both {previous:?} and {action:?}"
                    );
                }
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// All keys bound to `action`.
    #[must_use]
    pub fn keys_for(&self, action: KeyAction) -> &[String] {
        self.bindings.get(&action).map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_default_key() {
        let opts = KeybindingOptions::default();
        for action in KeyAction::ALL {
            assert!(
                !opts.keys_for(action).is_empty(),
                "{action:?} has no default key"
            );
        }
    }

    #[test]
    fn custom_bindings_rebuild_lookup() {
        let mut opts = KeybindingOptions::default();
        let _ = opts
            .bindings
            .insert(KeyAction::MoveUp, vec!["PageUp".to_owned()]);
        opts.rebuild_reverse_map();

        assert_eq!(opts.lookup("PageUp"), Some(KeyAction::MoveUp));
        assert_eq!(opts.lookup("KeyE"), None);
        assert_eq!(opts.lookup("Space"), None);
    }
}
