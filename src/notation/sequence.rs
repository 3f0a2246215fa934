//! Whitespace-separated move sequences.
//!
//! Sequences use the strict single-move parser, so `"F R U' B2"` parses but
//! `"F R3"` does not. Applying a sequence parsed from text is all-or-nothing:
//! every token is validated before the first turn.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::moves::Move;
use crate::core::{Cube, CubeResult};

/// An ordered list of moves.
///
/// SmallVec keeps typical scrambles (up to 32 moves) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSequence {
    moves: SmallVec<[Move; 32]>,
}

impl MoveSequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the sequence has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The moves in order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Iterate the moves in order.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// The sequence that undoes this one: reversed, each move inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.moves.iter().rev().map(|mv| mv.inverse()).collect()
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for MoveSequence {
    type Err = crate::core::CubeError;

    /// Parse whitespace-separated moves. Blank input is an empty sequence.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Move>).collect()
    }
}

impl Cube {
    /// Apply every move of a sequence in order.
    pub fn apply_sequence(&mut self, sequence: &MoveSequence) {
        for &mv in sequence.iter() {
            self.apply(mv);
        }
        debug!("applied sequence of {} moves", sequence.len());
    }

    /// Parse a sequence and apply it.
    ///
    /// If any token is invalid nothing is applied.
    pub fn apply_algorithm(&mut self, algorithm: &str) -> CubeResult<MoveSequence> {
        let sequence: MoveSequence = algorithm
            .parse()
            .inspect_err(|err| warn!("rejected algorithm: {err}"))?;
        self.apply_sequence(&sequence);
        Ok(sequence)
    }
}
