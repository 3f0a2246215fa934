//! Single moves in standard notation.
//!
//! A move is a face letter plus an optional modifier:
//! - `F`: front clockwise
//! - `F'`: front counter-clockwise
//! - `F2`: front clockwise twice
//!
//! There are two parsers. [`Move::parse_lenient`] only looks at the first
//! two characters and is what [`Cube::apply_notation`] uses. `FromStr` is
//! strict and rejects anything outside `[FBUDLR]('|2)?`.
//!
//! ## Example
//!
//! ```
//! use cube_engine::core::FaceId;
//! use cube_engine::notation::{Move, Turn};
//!
//! let mv: Move = "R'".parse().unwrap();
//! assert_eq!(mv, Move::new(FaceId::Right, Turn::CounterClockwise));
//! assert_eq!(mv.inverse().to_string(), "R");
//!
//! // Lenient parsing ignores unknown modifiers.
//! assert_eq!(Move::parse_lenient("R3").unwrap().to_string(), "R");
//! assert!("R3".parse::<Move>().is_err());
//! ```
//!
//! [`Cube::apply_notation`]: crate::core::Cube::apply_notation

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Cube, CubeError, CubeResult, Direction, FaceId};

/// How far a move turns its face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// One quarter turn clockwise. No suffix.
    Clockwise,
    /// One quarter turn counter-clockwise. Suffix `'`.
    CounterClockwise,
    /// Two clockwise quarter turns. Suffix `2`.
    Double,
}

impl Turn {
    /// Notation suffix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }

    /// The turn that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }

    /// Quarter turns to perform, and in which direction.
    #[must_use]
    pub const fn quarter_turns(self) -> (Direction, usize) {
        match self {
            Turn::Clockwise => (Direction::Clockwise, 1),
            Turn::CounterClockwise => (Direction::CounterClockwise, 1),
            Turn::Double => (Direction::Clockwise, 2),
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Turn::Clockwise),
            "'" => Some(Turn::CounterClockwise),
            "2" => Some(Turn::Double),
            _ => None,
        }
    }
}

/// A face plus a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: FaceId,
    pub turn: Turn,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(face: FaceId, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }

    /// Parse by first and second character only.
    ///
    /// - Empty input, or a first character not one of `F B U D L R`:
    ///   [`CubeError::InvalidNotation`]
    /// - Second character `'` or `2` selects the turn; anything else
    ///   (including nothing) means clockwise. Later characters are ignored.
    pub fn parse_lenient(notation: &str) -> CubeResult<Self> {
        let invalid = || CubeError::InvalidNotation(notation.to_string());
        let mut chars = notation.chars();
        let first = chars.next().ok_or_else(invalid)?;
        let face = FaceId::from_letter(first).ok_or_else(invalid)?;

        let turn = match chars.next() {
            Some('\'') => Turn::CounterClockwise,
            Some('2') => Turn::Double,
            _ => Turn::Clockwise,
        };
        Ok(Self::new(face, turn))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}

impl std::str::FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidNotation(s.to_string());
        let mut chars = s.chars();
        let first = chars.next().ok_or_else(invalid)?;

        let face = FaceId::from_letter(first).ok_or_else(invalid)?;
        let turn = Turn::from_suffix(chars.as_str()).ok_or_else(invalid)?;
        Ok(Self::new(face, turn))
    }
}

impl Cube {
    /// Apply a parsed move.
    ///
    /// A double move is two complete clockwise quarter turns.
    pub fn apply(&mut self, mv: Move) {
        let (direction, count) = mv.turn.quarter_turns();
        for _ in 0..count {
            self.rotate(mv.face, direction);
        }
        trace!("applied {mv}");
    }

    /// Parse a single move with [`Move::parse_lenient`] and apply it.
    ///
    /// On error the cube is not touched.
    pub fn apply_notation(&mut self, notation: &str) -> CubeResult<()> {
        let mv = Move::parse_lenient(notation)
            .inspect_err(|err| warn!("rejected move: {err}"))?;
        self.apply(mv);
        Ok(())
    }
}
