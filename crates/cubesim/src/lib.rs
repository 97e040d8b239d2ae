//! Move engine for a 3x3x3 puzzle cube.
//!
//! [`CubeSimulation`] owns the 27 cubies, the queue of requested moves, and
//! the progress of the twist currently being animated. Input code calls
//! [`CubeSimulation::request_move()`], the frame clock calls
//! [`CubeSimulation::tick()`], and rendering code reads
//! [`CubeSimulation::render_data()`].

mod cubie;
mod moves;
mod render;
mod simulation;

pub use cubie::{Cubie, CubieId, solved_cubies};
pub use moves::{Move, ParseMoveError, format_moves, parse_moves};
pub use render::CubieTransform;
pub use simulation::CubeSimulation;

#[cfg(test)]
mod tests;
