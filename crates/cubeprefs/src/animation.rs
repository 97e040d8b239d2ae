use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

/// Default duration of one twist, in seconds.
pub const DEFAULT_TWIST_DURATION: f32 = 0.5;

/// Twist animation preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Seconds per twist.
    pub twist_duration: f32,
    /// Easing curve applied to twist progress before it is displayed.
    pub twist_interpolation: InterpolateFn,
    /// Whether to twist faster while many twists are queued.
    pub dynamic_twist_speed: bool,
}

impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_duration: DEFAULT_TWIST_DURATION,
            twist_interpolation: InterpolateFn::default(),
            dynamic_twist_speed: false,
        }
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize,
        Deserialize,
        Debug,
        Default,
        Copy,
        Clone,
        PartialEq,
        Eq,
        Hash,
        strum::VariantArray,
    )]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        /// Constant speed.
        Lerp,
        /// Half period of a cosine wave.
        Cosine,
        /// Smoothstep.
        Cubic,
        /// Cubic ease-in for the first half, cubic ease-out for the second.
        #[default]
        EaseInOutCubic,
        /// Quarter circles.
        Circular,
        /// Passes the end and then settles back.
        Overshoot,
    }

    impl InterpolateFn {
        /// Returns the interpolation value for `t` in the range [0, 1].
        ///
        /// Every function starts at `0.0` and ends at `1.0`, up to rounding.
        pub fn interpolate(self, t: f32) -> f32 {
            match self {
                Self::Lerp => t,

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::Cubic => (3.0 - 2.0 * t) * t * t,

                Self::EaseInOutCubic => {
                    if t < 0.5 {
                        4.0 * t * t * t
                    } else {
                        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                    }
                }

                Self::Circular => {
                    if t < 0.5 {
                        (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) * 0.5
                    } else {
                        (1.0 + (1.0 - (-2.0 * t + 2.0).powi(2)).sqrt()) * 0.5
                    }
                }

                Self::Overshoot => {
                    // https://easings.net/#easeOutBack
                    let c1 = 1.70158;
                    let c3 = c1 + 1.0;
                    1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
                }
            }
        }

        /// Returns a human-friendly name for the function.
        pub fn name(self) -> &'static str {
            match self {
                Self::Lerp => "Linear",
                Self::Cosine => "Cosine",
                Self::Cubic => "Cubic",
                Self::EaseInOutCubic => "Ease in-out",
                Self::Circular => "Circular",
                Self::Overshoot => "Overshoot",
            }
        }
    }

}
