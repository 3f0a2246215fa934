//! The cube and its rotation engine.
//!
//! ## Cube
//!
//! Six named faces, each an independent [`Face`]. A new cube is solved using
//! the fixed color scheme: up white, down yellow, front green, back blue,
//! left orange, right red.
//!
//! ## Rotations
//!
//! A quarter turn has two parts that always complete together:
//!
//! 1. The turning face's own grid is rotated.
//! 2. The edge ring around it (see [`ring`](super::ring)) shifts one strip.
//!
//! Both parts are permutations, so colors are never created or lost and the
//! six centers never move. These guarantees hold for states reached through
//! rotations; a cube decoded from an arbitrary snapshot is accepted as-is.
//!
//! ## Snapshots
//!
//! `Cube` serializes as a record with fields `up, down, front, back, left,
//! right`, each a 3×3 grid of lowercase color names.

use log::{debug, trace, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::Color;
use super::error::CubeResult;
use super::face::{Face, FaceId};
use super::ring::{ring, Ring, Strip};

/// Quarter-turn direction, as seen looking at the turning face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// `true` maps to clockwise.
    #[must_use]
    pub const fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Center colors of all six faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorScheme {
    pub up: Color,
    pub down: Color,
    pub front: Color,
    pub back: Color,
    pub left: Color,
    pub right: Color,
}

impl ColorScheme {
    /// The scheme every new cube starts with.
    pub const STANDARD: ColorScheme = ColorScheme {
        up: FaceId::Up.home_color(),
        down: FaceId::Down.home_color(),
        front: FaceId::Front.home_color(),
        back: FaceId::Back.home_color(),
        left: FaceId::Left.home_color(),
        right: FaceId::Right.home_color(),
    };

    /// Center color for a face.
    #[must_use]
    pub const fn get(&self, face: FaceId) -> Color {
        match face {
            FaceId::Up => self.up,
            FaceId::Down => self.down,
            FaceId::Front => self.front,
            FaceId::Back => self.back,
            FaceId::Left => self.left,
            FaceId::Right => self.right,
        }
    }
}

/// A 3×3×3 cube.
///
/// `Clone` produces an independent copy: the faces are plain arrays, so
/// mutating one cube never affects another.
///
/// ## Example
///
/// ```
/// use cube_engine::core::{Cube, Direction, FaceId};
///
/// let mut cube = Cube::new();
/// cube.rotate(FaceId::Front, Direction::Clockwise);
/// assert!(!cube.is_solved());
///
/// cube.rotate(FaceId::Front, Direction::CounterClockwise);
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cube {
    up: Face,
    down: Face,
    front: Face,
    back: Face,
    left: Face,
    right: Face,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Create a solved cube.
    #[must_use]
    pub fn new() -> Self {
        Self::from_fn(|face| Face::solid(face.home_color()))
    }

    /// Build a cube face by face. Any grid is accepted.
    pub fn from_fn(mut f: impl FnMut(FaceId) -> Face) -> Self {
        Self {
            up: f(FaceId::Up),
            down: f(FaceId::Down),
            front: f(FaceId::Front),
            back: f(FaceId::Back),
            left: f(FaceId::Left),
            right: f(FaceId::Right),
        }
    }

    /// Replace the whole state with a solved cube.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("cube reset to solved state");
    }

    /// Get a face by ID.
    #[must_use]
    pub fn face(&self, id: FaceId) -> &Face {
        match id {
            FaceId::Up => &self.up,
            FaceId::Down => &self.down,
            FaceId::Front => &self.front,
            FaceId::Back => &self.back,
            FaceId::Left => &self.left,
            FaceId::Right => &self.right,
        }
    }

    fn face_mut(&mut self, id: FaceId) -> &mut Face {
        match id {
            FaceId::Up => &mut self.up,
            FaceId::Down => &mut self.down,
            FaceId::Front => &mut self.front,
            FaceId::Back => &mut self.back,
            FaceId::Left => &mut self.left,
            FaceId::Right => &mut self.right,
        }
    }

    /// Iterate (FaceId, &Face) pairs in snapshot order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        FaceId::ALL.into_iter().map(move |id| (id, self.face(id)))
    }

    // === Rotation ===

    /// Turn a face a quarter turn.
    pub fn rotate(&mut self, face: FaceId, direction: Direction) {
        let grid = self.face_mut(face);
        *grid = match direction {
            Direction::Clockwise => grid.rotated_clockwise(),
            Direction::CounterClockwise => grid.rotated_counter_clockwise(),
        };
        self.cycle_ring(ring(face), direction);
        trace!("rotated {face} {direction:?}");
    }

    /// Turn a face given by lowercase name.
    ///
    /// Fails with [`CubeError::InvalidFace`] for any name other than
    /// `front, back, up, down, left, right`; the cube is not touched.
    pub fn rotate_face(&mut self, face: &str, clockwise: bool) -> CubeResult<()> {
        let id = FaceId::from_name(face).inspect_err(|err| warn!("rejected rotation: {err}"))?;
        self.rotate(id, Direction::from_clockwise(clockwise));
        Ok(())
    }

    /// Shift the four strips of `ring` one slot in `direction`.
    ///
    /// One strip is held aside before the overwrites start; every other
    /// read happens before its source is overwritten.
    fn cycle_ring(&mut self, ring: &Ring, direction: Direction) {
        match direction {
            Direction::Clockwise => {
                let held = self.read_strip(&ring[3]);
                for k in (1..4).rev() {
                    let cells = self.read_strip(&ring[k - 1]);
                    self.write_strip(&ring[k], cells);
                }
                self.write_strip(&ring[0], held);
            }
            Direction::CounterClockwise => {
                let held = self.read_strip(&ring[0]);
                for k in 0..3 {
                    let cells = self.read_strip(&ring[k + 1]);
                    self.write_strip(&ring[k], cells);
                }
                self.write_strip(&ring[3], held);
            }
        }
    }

    fn read_strip(&self, strip: &Strip) -> [Color; 3] {
        let mut cells = self.face(strip.face).line(strip.line);
        if strip.reversed {
            cells.reverse();
        }
        cells
    }

    fn write_strip(&mut self, strip: &Strip, mut cells: [Color; 3]) {
        if strip.reversed {
            cells.reverse();
        }
        self.face_mut(strip.face).set_line(strip.line, cells);
    }

    // === Inspection ===

    /// Center colors of all faces.
    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme {
            up: self.up.center(),
            down: self.down.center(),
            front: self.front.center(),
            back: self.back.center(),
            left: self.left.center(),
            right: self.right.center(),
        }
    }

    /// Number of stickers of each color.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for (_, face) in self.faces() {
            for color in face.stickers() {
                *counts.entry(color).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Whether every face is a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces().all(|(_, face)| face.is_solid())
    }

    // === Serialization ===

    /// Pretty-printed JSON snapshot.
    pub fn to_json(&self) -> CubeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a JSON snapshot.
    pub fn from_json(json: &str) -> CubeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact binary snapshot.
    pub fn to_bytes(&self) -> CubeResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> CubeResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Index<FaceId> for Cube {
    type Output = Face;

    fn index(&self, id: FaceId) -> &Self::Output {
        self.face(id)
    }
}

impl IndexMut<FaceId> for Cube {
    fn index_mut(&mut self, id: FaceId) -> &mut Self::Output {
        self.face_mut(id)
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}
