//! Standard move notation: single moves, sequences, validation.
//!
//! Face letters are `F B U D L R`; a move may carry `'` (counter-clockwise)
//! or `2` (double turn).

pub mod moves;
pub mod sequence;
pub mod validate;

pub use moves::{Move, Turn};
pub use sequence::MoveSequence;
pub use validate::{field_name, validate_face, validate_notation};
