//! Faces: identifiers and 3×3 sticker grids.
//!
//! ## FaceId
//!
//! Names one of the six faces. Faces are addressed by lowercase name
//! (`"front"`) at the engine boundary and by letter (`'F'`) in notation.
//!
//! ## Face
//!
//! A fixed 3×3 grid indexed `[row][col]`. Each face is laid out as seen from
//! outside the cube, following the unfolded net:
//!
//! ```text
//!            +-------+
//!            |  up   |
//!    +-------+-------+-------+-------+
//!    | left  | front | right | back  |
//!    +-------+-------+-------+-------+
//!            | down  |
//!            +-------+
//! ```
//!
//! Row 0 of the four side faces borders `up`. Row 0 of `up` borders `back`,
//! row 0 of `down` borders `front`.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::{CubeError, CubeResult};

/// Face identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceId {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl FaceId {
    /// All faces, in snapshot field order.
    pub const ALL: [FaceId; 6] = [
        FaceId::Up,
        FaceId::Down,
        FaceId::Front,
        FaceId::Back,
        FaceId::Left,
        FaceId::Right,
    ];

    /// Lowercase face name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FaceId::Up => "up",
            FaceId::Down => "down",
            FaceId::Front => "front",
            FaceId::Back => "back",
            FaceId::Left => "left",
            FaceId::Right => "right",
        }
    }

    /// Notation letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            FaceId::Up => 'U',
            FaceId::Down => 'D',
            FaceId::Front => 'F',
            FaceId::Back => 'B',
            FaceId::Left => 'L',
            FaceId::Right => 'R',
        }
    }

    /// Parse a lowercase face name. Case-sensitive.
    pub fn from_name(name: &str) -> CubeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| CubeError::InvalidFace(name.to_string()))
    }

    /// Parse a notation letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.letter() == letter)
    }

    /// Center color of this face on a solved cube.
    #[must_use]
    pub const fn home_color(self) -> Color {
        match self {
            FaceId::Up => Color::White,
            FaceId::Down => Color::Yellow,
            FaceId::Front => Color::Green,
            FaceId::Back => Color::Blue,
            FaceId::Left => Color::Orange,
            FaceId::Right => Color::Red,
        }
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FaceId {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// A row or column of a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
}

/// A 3×3 grid of stickers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Face(pub [[Color; 3]; 3]);

impl Face {
    /// A face with every sticker set to `color`.
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self([[color; 3]; 3])
    }

    /// The center sticker.
    #[must_use]
    pub const fn center(&self) -> Color {
        self.0[1][1]
    }

    /// Sticker at `[row][col]`.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> Color {
        self.0[row][col]
    }

    /// Whether every sticker matches the center.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        let center = self.center();
        self.stickers().all(|c| c == center)
    }

    /// Iterate stickers row by row.
    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().flatten().copied()
    }

    /// Rotated copy: `new[i][j] = old[2-j][i]`.
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        let old = &self.0;
        Self(std::array::from_fn(|i| std::array::from_fn(|j| old[2 - j][i])))
    }

    /// Rotated copy: `new[i][j] = old[j][2-i]`.
    #[must_use]
    pub fn rotated_counter_clockwise(&self) -> Self {
        let old = &self.0;
        Self(std::array::from_fn(|i| std::array::from_fn(|j| old[j][2 - i])))
    }

    /// Read a line in increasing index order.
    #[must_use]
    pub fn line(&self, line: Line) -> [Color; 3] {
        match line {
            Line::Row(r) => self.0[r],
            Line::Col(c) => [self.0[0][c], self.0[1][c], self.0[2][c]],
        }
    }

    /// Overwrite a line in increasing index order.
    pub fn set_line(&mut self, line: Line, cells: [Color; 3]) {
        match line {
            Line::Row(r) => self.0[r] = cells,
            Line::Col(c) => {
                for (row, cell) in self.0.iter_mut().zip(cells) {
                    row[c] = cell;
                }
            }
        }
    }
}
