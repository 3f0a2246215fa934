//! # cube-engine
//!
//! State and rotation engine for a 3×3×3 Rubik's Cube.
//!
//! ## Design Principles
//!
//! 1. **Fixed-size state**: A cube is six 3×3 arrays. No heap, no aliasing;
//!    `Clone` is a full independent copy.
//!
//! 2. **Rotations are permutations**: A quarter turn rotates one face grid
//!    and shifts the 12-sticker ring around it. Colors are never created
//!    or dropped and centers never move.
//!
//! 3. **Geometry as data**: The ring around each face is a table of four
//!    (neighbor, line, reversed) strips, applied by one routine.
//!
//! ## Modules
//!
//! - `core`: Colors, faces, edge rings, the cube, errors
//! - `notation`: Standard move notation, sequences, request validation
//! - `scramble`: Seeded random scrambles
//! - `shared`: Thread-safe cube handle
//!
//! ## Example
//!
//! ```
//! use cube_engine::{Cube, CubeError};
//!
//! let mut cube = Cube::new();
//! cube.apply_notation("F2").unwrap();
//! cube.rotate_face("right", false).unwrap();
//!
//! assert_eq!(cube.rotate_face("diagonal", true), Err(CubeError::InvalidFace("diagonal".into())));
//!
//! cube.reset();
//! assert!(cube.is_solved());
//! ```

pub mod core;
pub mod notation;
pub mod scramble;
pub mod shared;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorScheme, Cube, CubeError, CubeResult, Direction, Face, FaceId, Line,
};

pub use crate::notation::{validate_face, validate_notation, Move, MoveSequence, Turn};

pub use crate::scramble::{ScrambleConfig, ScrambleRng, Scrambler};

pub use crate::shared::SharedCube;
