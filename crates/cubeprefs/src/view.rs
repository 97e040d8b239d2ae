use serde::{Deserialize, Serialize};

/// Camera and cube appearance preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewPreferences {
    /// Gap between adjacent cubies, relative to the size of one cubie.
    pub cubie_gap: f32,
    /// Initial rotation of the camera around the vertical axis, in radians.
    pub yaw: f32,
    /// Initial rotation of the camera around the horizontal axis, in
    /// radians.
    pub pitch: f32,
    /// Zoom factor.
    pub zoom: f32,
    /// Whether to slowly spin the cube while it is not twisting.
    pub auto_rotate: bool,
    /// Speed of the idle spin, in radians per second.
    pub auto_rotate_speed: f32,
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            cubie_gap: 0.02,
            yaw: 0.6,
            pitch: 0.5,
            zoom: 1.0,
            auto_rotate: true,
            auto_rotate_speed: 0.5,
        }
    }
}

impl ViewPreferences {
    /// Returns the distance between the centers of adjacent cubies.
    pub fn cubie_spacing(&self) -> f32 {
        1.0 + self.cubie_gap
    }
}
