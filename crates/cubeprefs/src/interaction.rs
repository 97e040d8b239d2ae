use serde::{Deserialize, Serialize};

/// Keyboard and mouse preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Whether holding down a key twists only once.
    pub ignore_key_repeat: bool,
    /// Radians of camera rotation per point of mouse drag.
    pub drag_sensitivity: f32,
}

impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            ignore_key_repeat: true,
            drag_sensitivity: 0.01,
        }
    }
}
