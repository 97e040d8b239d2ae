//! Quarter turns of a single layer of the cube.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use cgmath::{Quaternion, Rad, Rotation, Rotation3, Vector3};

use crate::{Axis, LAYER_EPSILON, Orientation, Point, Sign, point_to_f32, round_to_point};

/// Quarter turn of one layer of the cube around a coordinate axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Twist {
    /// Axis to rotate around.
    pub axis: Axis,
    /// Coordinate of the turning layer along `axis`.
    ///
    /// Outer layers are `-1` and `1`. `0` is the middle slice.
    pub slice: i8,
    /// Rotation sense around `axis`, using the right-hand rule.
    pub direction: Sign,
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]{}", self.axis, self.slice, self.direction)
    }
}

impl Twist {
    /// Constructs a twist.
    pub const fn new(axis: Axis, slice: i8, direction: Sign) -> Self {
        Self {
            axis,
            slice,
            direction,
        }
    }

    /// Returns the twist that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            direction: -self.direction,
            ..self
        }
    }

    /// Returns the signed angle of the full twist, in radians.
    pub fn angle(self) -> f32 {
        FRAC_PI_2 * self.direction.to_num::<f32>()
    }

    /// Returns the rotation for a fraction `t` of the twist.
    pub fn partial_rotation(self, t: f32) -> Quaternion<f32> {
        Quaternion::from_axis_angle(self.axis.unit_vector(), Rad(self.angle() * t))
    }

    /// Returns the rotation for the full twist.
    pub fn rotation(self) -> Quaternion<f32> {
        self.partial_rotation(1.0)
    }
}

/// Returns whether a point lies in the layer turned by `twist`.
///
/// The comparison uses [`LAYER_EPSILON`], so it also works for points that
/// have drifted slightly off the lattice and for any slice value.
pub fn is_affected(p: Point, twist: Twist) -> bool {
    is_affected_f32(point_to_f32(p), twist)
}

/// Returns whether a floating-point position lies in the layer turned by
/// `twist`. See [`is_affected()`].
pub fn is_affected_f32(p: Vector3<f32>, twist: Twist) -> bool {
    (p[twist.axis.index()] - f32::from(twist.slice)).abs() < LAYER_EPSILON
}

/// Rotates a lattice point by a full twist and rounds the result back onto
/// the lattice.
///
/// Rounding removes floating-point error, so repeated twists never drift.
pub fn rotate_point(p: Point, twist: Twist) -> Point {
    round_to_point(twist.rotation().rotate_vector(point_to_f32(p)))
}

/// Applies a full twist to an orientation.
///
/// The twist is applied in world space, after the existing orientation
/// (`twist * orientation`). The result is snapped onto the exact cube
/// rotation it approximates; see [`crate::snap_orientation()`].
pub fn rotate_orientation(orientation: Orientation, twist: Twist) -> Orientation {
    crate::snap_orientation(twist.rotation() * orientation)
}

/// Returns the transform of a cubie partway through `twist`.
///
/// `t` is the eased progress of the twist, from `0.0` to `1.0`. Affected
/// cubies sweep along an arc around the twist axis. Cubies outside the
/// turning layer keep their rest transform.
pub fn animated_transform(
    p: Point,
    orientation: Orientation,
    twist: Twist,
    t: f32,
) -> (Vector3<f32>, Orientation) {
    let rest_position = point_to_f32(p);
    if !is_affected(p, twist) {
        return (rest_position, orientation);
    }
    let partial = twist.partial_rotation(t);
    (partial.rotate_vector(rest_position), partial * orientation)
}
