use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "KeybindingTable", into = "KeybindingTable")]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `CancelSnap` → `"Escape"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    key_to_action: HashMap<String, KeyAction>,
}

/// On-disk shape of [`KeybindingOptions`].
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct KeybindingTable {
    bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingTable {
    fn default() -> Self {
        Self {
            bindings: KeybindingOptions::default_bindings(),
        }
    }
}

impl From<KeybindingTable> for KeybindingOptions {
    fn from(table: KeybindingTable) -> Self {
        Self::from_bindings(table.bindings)
    }
}

impl From<KeybindingOptions> for KeybindingTable {
    fn from(options: KeybindingOptions) -> Self {
        Self {
            bindings: options.bindings,
        }
    }
}

impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for KeybindingOptions {}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::from_bindings(Self::default_bindings())
    }
}

impl KeybindingOptions {
    fn default_bindings() -> HashMap<KeyAction, String> {
        HashMap::from([
            (KeyAction::SnapToNearest, "Space".into()),
            (KeyAction::CancelSnap, "Escape".into()),
            (KeyAction::NextPreset, "ArrowRight".into()),
            (KeyAction::PreviousPreset, "ArrowLeft".into()),
        ])
    }

    /// Build options from an action → key map.
    #[must_use]
    pub fn from_bindings(bindings: HashMap<KeyAction, String>) -> Self {
        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }

    /// Bind `action` to `key`, replacing any previous binding.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
