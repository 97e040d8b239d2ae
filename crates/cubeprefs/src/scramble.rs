use serde::{Deserialize, Serialize};

/// Default number of twists in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Scramble preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScramblePreferences {
    /// Number of random twists in a scramble.
    pub length: usize,
}

impl Default for ScramblePreferences {
    fn default() -> Self {
        Self {
            length: DEFAULT_SCRAMBLE_LENGTH,
        }
    }
}
