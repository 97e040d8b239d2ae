use cgmath::Vector3;
use cubemath::{Face, Orientation, Point, Twist};
use serde::Serialize;

use crate::{Cubie, CubieId};

/// Where to draw one cubie for one frame.
///
/// This is a snapshot. It is rebuilt by
/// [`crate::CubeSimulation::render_data()`] and never aliases the
/// simulation's own state.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct CubieTransform {
    /// Stable identifier of the cubie.
    pub id: CubieId,
    /// Position of the cubie in the solved state, which determines its
    /// sticker colors.
    pub initial_position: Point,
    /// Center of the cubie, in units of one cubie.
    pub position: Vector3<f32>,
    /// Rotation of the cubie.
    pub orientation: Orientation,
}

impl CubieTransform {
    /// Returns the transform of a cubie, animated by a fraction `t` of
    /// `twist` if there is one.
    pub(crate) fn new(cubie: &Cubie, animation: Option<(Twist, f32)>) -> Self {
        let (position, orientation) = match animation {
            Some((twist, t)) => {
                cubemath::animated_transform(cubie.position(), cubie.orientation(), twist, t)
            }
            None => (
                cubemath::point_to_f32(cubie.position()),
                cubie.orientation(),
            ),
        };
        Self {
            id: cubie.id(),
            initial_position: cubie.initial_position(),
            position,
            orientation,
        }
    }

    /// Returns the faces whose color this cubie carries.
    pub fn stickers(&self) -> impl Iterator<Item = Face> + use<> {
        crate::cubie::stickers_at(self.initial_position)
    }
}
