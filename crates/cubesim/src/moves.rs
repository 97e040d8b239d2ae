//! Face-turn moves and their notation.

use std::fmt;
use std::str::FromStr;

use cubemath::{Axis, Face, Sign, Twist};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when parsing move notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ParseMoveError {
    #[error("empty move")]
    Empty,
    #[error("unknown face {0:?}")]
    UnknownFace(char),
    #[error("unknown suffix {suffix:?} in move {token:?}")]
    UnknownSuffix { token: String, suffix: String },
}

/// Quarter turn of one outer face of the cube.
///
/// There are exactly twelve moves: each of the six faces turned clockwise or
/// counterclockwise (prime), as seen from outside that face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Move {
    face: Face,
    prime: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_token(s)? {
            (m, 1) => Ok(m),
            _ => Err(unknown_suffix(s)),
        }
    }
}

impl From<Move> for String {
    fn from(m: Move) -> Self {
        m.name().to_owned()
    }
}

impl TryFrom<String> for Move {
    type Error = ParseMoveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Move {
    /// All twelve moves, in the order R R' L L' U U' D D' F F' B B'.
    pub const ALL: [Move; 12] = [
        Move::new(Face::R, false),
        Move::new(Face::R, true),
        Move::new(Face::L, false),
        Move::new(Face::L, true),
        Move::new(Face::U, false),
        Move::new(Face::U, true),
        Move::new(Face::D, false),
        Move::new(Face::D, true),
        Move::new(Face::F, false),
        Move::new(Face::F, true),
        Move::new(Face::B, false),
        Move::new(Face::B, true),
    ];

    /// Constructs a move turning `face` clockwise, or counterclockwise if
    /// `prime` is `true`.
    pub const fn new(face: Face, prime: bool) -> Self {
        Self { face, prime }
    }

    /// Returns the move for a key press: the face letter turns that face
    /// clockwise, and holding shift turns it counterclockwise.
    pub fn from_key(key: char, shift: bool) -> Option<Self> {
        Face::from_symbol(key).map(|face| Self::new(face, shift))
    }

    /// Returns the face that turns.
    pub fn face(self) -> Face {
        self.face
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self::new(self.face, !self.prime)
    }

    /// Returns the layer twist performed by this move.
    pub fn twist(self) -> Twist {
        let clockwise = clockwise_twist(self.face);
        match self.prime {
            false => clockwise,
            true => clockwise.rev(),
        }
    }
    /// Returns the axis the move rotates around.
    pub fn axis(self) -> Axis {
        self.twist().axis
    }
    /// Returns the coordinate of the turning layer along [`Self::axis()`].
    pub fn slice(self) -> i8 {
        self.twist().slice
    }
    /// Returns the rotation sense of the move around [`Self::axis()`].
    pub fn direction(self) -> Sign {
        self.twist().direction
    }

    /// Returns the move in standard notation, such as `R` or `U'`.
    pub fn name(self) -> &'static str {
        match (self.face, self.prime) {
            (Face::R, false) => "R",
            (Face::R, true) => "R'",
            (Face::L, false) => "L",
            (Face::L, true) => "L'",
            (Face::U, false) => "U",
            (Face::U, true) => "U'",
            (Face::D, false) => "D",
            (Face::D, true) => "D'",
            (Face::F, false) => "F",
            (Face::F, true) => "F'",
            (Face::B, false) => "B",
            (Face::B, true) => "B'",
        }
    }
}

/// Returns the clockwise twist for a face.
///
/// Clockwise is the negative rotation sense on the positive end of an axis
/// and the positive sense on the negative end.
const fn clockwise_twist(face: Face) -> Twist {
    match face {
        Face::R => Twist::new(Axis::X, 1, Sign::Neg),
        Face::L => Twist::new(Axis::X, -1, Sign::Pos),
        Face::U => Twist::new(Axis::Y, 1, Sign::Neg),
        Face::D => Twist::new(Axis::Y, -1, Sign::Pos),
        Face::F => Twist::new(Axis::Z, 1, Sign::Neg),
        Face::B => Twist::new(Axis::Z, -1, Sign::Pos),
    }
}

/// Parses a single token such as `R`, `U'`, or `F2`. Returns the move and how
/// many times it repeats.
fn parse_token(token: &str) -> Result<(Move, usize), ParseMoveError> {
    let token = token.trim();
    let mut chars = token.chars();
    let face_char = chars.next().ok_or(ParseMoveError::Empty)?;
    let face = Face::from_symbol(face_char).ok_or(ParseMoveError::UnknownFace(face_char))?;
    let (prime, count) = match chars.as_str() {
        "" => (false, 1),
        "'" | "’" => (true, 1),
        "2" => (false, 2),
        "2'" | "2’" => (true, 2),
        _ => return Err(unknown_suffix(token)),
    };
    Ok((Move::new(face, prime), count))
}

fn unknown_suffix(token: &str) -> ParseMoveError {
    let token = token.trim();
    let suffix = token.chars().skip(1).collect();
    ParseMoveError::UnknownSuffix {
        token: token.to_owned(),
        suffix,
    }
}

/// Parses a whitespace-separated sequence of moves, such as `R U R' U'`.
///
/// Half turns like `R2` expand to two quarter turns.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    let mut ret = vec![];
    for token in s.split_whitespace() {
        let (m, count) = parse_token(token)?;
        ret.extend(std::iter::repeat_n(m, count));
    }
    Ok(ret)
}

/// Formats a sequence of moves, separated by spaces.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(" ")
}
