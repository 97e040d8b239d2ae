use cubemath::{Face, Orientation, Point, Twist};
use serde::Serialize;

/// Stable identifier for a cubie.
pub type CubieId = usize;

/// One of the 27 small cubes that make up the puzzle.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Cubie {
    id: CubieId,
    position: Point,
    orientation: Orientation,
    initial_position: Point,
}

impl Cubie {
    fn new(id: CubieId, position: Point) -> Self {
        Self {
            id,
            position,
            orientation: cubemath::identity_orientation(),
            initial_position: position,
        }
    }

    /// Returns the cubie's stable identifier.
    pub fn id(&self) -> CubieId {
        self.id
    }
    /// Returns the lattice point the cubie currently occupies.
    pub fn position(&self) -> Point {
        self.position
    }
    /// Returns the cubie's rotation relative to the solved state.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    /// Returns the lattice point the cubie occupied in the solved state.
    pub fn initial_position(&self) -> Point {
        self.initial_position
    }

    /// Returns the faces whose color this cubie carries.
    ///
    /// Each sticker sits on the cubie's local face with the same name, so
    /// its current direction is the face normal rotated by
    /// [`Self::orientation()`].
    pub fn stickers(&self) -> impl Iterator<Item = Face> + use<> {
        stickers_at(self.initial_position)
    }

    /// Applies a committed twist to the cubie, if the cubie is in the turning
    /// layer. Returns whether the cubie moved.
    pub(crate) fn twist(&mut self, twist: Twist) -> bool {
        if !cubemath::is_affected(self.position, twist) {
            return false;
        }
        self.position = cubemath::rotate_point(self.position, twist);
        self.orientation = cubemath::rotate_orientation(self.orientation, twist);
        true
    }
}

/// Returns the faces whose color is carried by the cubie that starts at
/// `initial_position`.
pub(crate) fn stickers_at(initial_position: Point) -> impl Iterator<Item = Face> {
    Face::iter().filter(move |f| f.contains(initial_position))
}

/// Returns the 27 cubies of a solved cube, ordered by ID.
pub fn solved_cubies() -> Vec<Cubie> {
    cubemath::lattice_points()
        .enumerate()
        .map(|(id, p)| Cubie::new(id, p))
        .collect()
}
