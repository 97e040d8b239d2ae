use std::f32::consts::FRAC_1_SQRT_2;

use cgmath::Quaternion;

/// Rotation of a cubie relative to its initial placement.
pub type Orientation = Quaternion<f32>;

/// Magnitudes that can appear as a component of a quaternion representing one
/// of the 24 rotations of the cube.
const CUBE_ROTATION_COMPONENTS: [f32; 4] = [0.0, 0.5, FRAC_1_SQRT_2, 1.0];

/// Maximum allowed deviation from a unit quaternion in
/// [`is_cube_rotation()`].
const NORM_EPSILON: f32 = 0.000_01;

/// Returns the identity orientation.
pub fn identity_orientation() -> Orientation {
    Quaternion::new(1.0, 0.0, 0.0, 0.0)
}

/// Snaps a quaternion that is approximately a rotation of the cube onto the
/// exact canonical quaternion for that rotation.
///
/// Each component is rounded to the nearest of `0`, `±1/2`, `±1/√2`, and `±1`,
/// then the whole quaternion is negated if needed so that its first nonzero
/// component is positive. Because `q` and `-q` are the same rotation, this
/// gives every rotation exactly one representation, so orientations can be
/// compared with `==`.
///
/// The input must be within a few ULPs of a cube rotation. Arbitrary
/// quaternions are not projected onto the nearest valid rotation.
pub fn snap_orientation(q: Orientation) -> Orientation {
    let components = [q.s, q.v.x, q.v.y, q.v.z].map(snap_component);
    let flip = match components.iter().find(|&&c| c != 0.0) {
        Some(&first) if first < 0.0 => -1.0,
        _ => 1.0,
    };
    let [s, x, y, z] = components.map(|c| if c == 0.0 { 0.0 } else { c * flip });
    Quaternion::new(s, x, y, z)
}

fn snap_component(c: f32) -> f32 {
    let magnitude = c.abs();
    let snapped = CUBE_ROTATION_COMPONENTS
        .into_iter()
        .fold(0.0_f32, |best, candidate| {
            if (candidate - magnitude).abs() < (best - magnitude).abs() {
                candidate
            } else {
                best
            }
        });
    if c < 0.0 { -snapped } else { snapped }
}

/// Returns whether `q` is exactly the canonical quaternion of one of the 24
/// rotations of the cube.
pub fn is_cube_rotation(q: Orientation) -> bool {
    let norm_squared = q.s * q.s + q.v.x * q.v.x + q.v.y * q.v.y + q.v.z * q.v.z;
    snap_orientation(q) == q && (norm_squared - 1.0).abs() < NORM_EPSILON
}
