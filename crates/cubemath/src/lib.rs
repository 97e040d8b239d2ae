//! Lattice points, quarter turns, and cube rotations for a 3x3x3 puzzle cube.
//!
//! Everything in this crate is a pure function of its inputs. Positions at
//! rest are integer lattice points in `{-1, 0, 1}^3`; orientations are unit
//! quaternions that are always snapped back onto one of the 24 rotations of
//! the cube after a committed twist.

pub use cgmath;

mod axis;
mod face;
mod orientation;
mod sign;
mod twist;

pub use axis::Axis;
pub use face::Face;
pub use orientation::{Orientation, identity_orientation, is_cube_rotation, snap_orientation};
pub use sign::Sign;
pub use twist::*;

/// Integer point on the cube lattice.
pub type Point = cgmath::Vector3<i8>;

/// Maximum distance between a coordinate and a layer for the coordinate to be
/// considered inside that layer.
///
/// Must be strictly less than the gap between adjacent layers (`1.0`).
pub const LAYER_EPSILON: f32 = 0.1;

/// Returns the float image of a lattice point.
pub fn point_to_f32(p: Point) -> cgmath::Vector3<f32> {
    p.map(f32::from)
}

/// Rounds each component of a vector to the nearest lattice coordinate.
pub fn round_to_point(v: cgmath::Vector3<f32>) -> Point {
    v.map(|x| x.round() as i8)
}

/// Returns every point of the 3x3x3 lattice, with X varying slowest and Z
/// varying fastest.
pub fn lattice_points() -> impl Iterator<Item = Point> {
    (-1..=1).flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| Point::new(x, y, z))))
}
