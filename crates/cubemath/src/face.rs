use std::fmt;

use cgmath::Vector3;

use crate::{Axis, Point, Sign};

/// Outer face of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::VariantArray)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// Right (+X)
    R,
    /// Left (-X)
    L,
    /// Up (+Y)
    U,
    /// Down (-Y)
    D,
    /// Front (+Z)
    F,
    /// Back (-Z)
    B,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Face {
    /// Iterates over all faces, in the order R, L, U, D, F, B.
    pub fn iter() -> impl Iterator<Item = Face> {
        <Self as strum::VariantArray>::VARIANTS.iter().copied()
    }

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }

    /// Returns which end of its axis the face lies on.
    pub fn sign(self) -> Sign {
        match self {
            Face::R | Face::U | Face::F => Sign::Pos,
            Face::L | Face::D | Face::B => Sign::Neg,
        }
    }

    /// Returns the uppercase letter used for the face in move notation.
    pub fn symbol(self) -> char {
        match self {
            Face::R => 'R',
            Face::L => 'L',
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
        }
    }

    /// Returns the face for a notation letter, ignoring case.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Face::R),
            'L' => Some(Face::L),
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> Vector3<f32> {
        self.axis().unit_vector() * self.sign().to_num::<f32>()
    }

    /// Returns the layer coordinate of the face along its axis.
    pub fn layer(self) -> i8 {
        self.sign().to_num()
    }

    /// Returns whether a lattice point lies in the outer layer of this face.
    ///
    /// Applied to a cubie's initial position, this says whether the cubie
    /// carries a sticker of this face's color.
    pub fn contains(self, p: Point) -> bool {
        p[self.axis().index()] == self.layer()
    }
}
