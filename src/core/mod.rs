//! Core engine types: colors, faces, edge rings, the cube, errors.
//!
//! Rotations are synchronous and never allocate. Callers that share a cube
//! between threads should go through [`SharedCube`](crate::shared::SharedCube).

pub mod color;
pub mod error;
pub mod face;
pub mod ring;
pub mod cube;

pub use color::Color;
pub use error::{CubeError, CubeResult};
pub use face::{Face, FaceId, Line};
pub use ring::{Ring, Strip};
pub use cube::{ColorScheme, Cube, Direction};
