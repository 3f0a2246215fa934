//! Edge rings: the 12 stickers that move with a face turn.
//!
//! Each face is surrounded by four 3-sticker strips on its neighbors. The
//! tables below list those strips in clockwise order as seen when looking
//! at the turning face. A strip is traversed in the same clockwise sense,
//! which means some lines are read back to front (`reversed`) because
//! neighboring faces do not share a coordinate frame.
//!
//! A clockwise turn moves every strip one slot forward around the ring;
//! counter-clockwise moves it one slot back.

use super::face::{FaceId, Line};

/// One strip of an edge ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    /// Neighbor face holding the strip.
    pub face: FaceId,
    /// Row or column on that face.
    pub line: Line,
    /// Traverse the line from index 2 down to 0.
    pub reversed: bool,
}

impl Strip {
    const fn new(face: FaceId, line: Line, reversed: bool) -> Self {
        Self { face, line, reversed }
    }
}

/// Four strips around a face, clockwise.
pub type Ring = [Strip; 4];

use FaceId::{Back, Down, Front, Left, Right, Up};
use Line::{Col, Row};

const FRONT_RING: Ring = [
    Strip::new(Up, Row(2), false),
    Strip::new(Right, Col(0), false),
    Strip::new(Down, Row(0), true),
    Strip::new(Left, Col(2), true),
];

const BACK_RING: Ring = [
    Strip::new(Up, Row(0), true),
    Strip::new(Left, Col(0), false),
    Strip::new(Down, Row(2), false),
    Strip::new(Right, Col(2), true),
];

const UP_RING: Ring = [
    Strip::new(Back, Row(0), false),
    Strip::new(Right, Row(0), false),
    Strip::new(Front, Row(0), false),
    Strip::new(Left, Row(0), false),
];

const DOWN_RING: Ring = [
    Strip::new(Front, Row(2), false),
    Strip::new(Right, Row(2), false),
    Strip::new(Back, Row(2), false),
    Strip::new(Left, Row(2), false),
];

const LEFT_RING: Ring = [
    Strip::new(Up, Col(0), false),
    Strip::new(Front, Col(0), false),
    Strip::new(Down, Col(0), false),
    Strip::new(Back, Col(2), true),
];

const RIGHT_RING: Ring = [
    Strip::new(Up, Col(2), true),
    Strip::new(Back, Col(0), false),
    Strip::new(Down, Col(2), true),
    Strip::new(Front, Col(2), true),
];

/// The edge ring around `face`.
#[must_use]
pub const fn ring(face: FaceId) -> &'static Ring {
    match face {
        FaceId::Front => &FRONT_RING,
        FaceId::Back => &BACK_RING,
        FaceId::Up => &UP_RING,
        FaceId::Down => &DOWN_RING,
        FaceId::Left => &LEFT_RING,
        FaceId::Right => &RIGHT_RING,
    }
}
