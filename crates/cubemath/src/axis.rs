use std::fmt;

use cgmath::Vector3;

/// Axis of rotation in 3D space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::VariantArray)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// X axis (right)
    X = 0,
    /// Y axis (up)
    Y = 1,
    /// Z axis (toward the viewer)
    Z = 2,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Axis {
    /// Returns the index of the axis in a vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase name of the axis.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Returns the unit vector along the axis.
    pub fn unit_vector(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }

    /// Returns the two other axes, in cyclic order.
    ///
    /// For each axis `a`, `a.perpendiculars()` returns `[b, c]` such that
    /// `a × b = c`.
    pub fn perpendiculars(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::Z, Axis::X],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}
