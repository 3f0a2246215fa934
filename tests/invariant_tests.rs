//! Structural invariants under arbitrary move sequences.
//!
//! Property tests drive random sequences through the engine and check that
//! colors are conserved, centers stay put, pieces stay whole, and turns
//! compose the way a physical cube does.

use proptest::prelude::*;

use cube_engine::{Color, Cube, Direction, FaceId, Move, MoveSequence, Turn};
use FaceId::{Back, Down, Front, Left, Right, Up};

type Sticker = (FaceId, usize, usize);

/// The 12 edge pieces as pairs of physically touching stickers.
const EDGES: [[Sticker; 2]; 12] = [
    [(Up, 2, 1), (Front, 0, 1)],
    [(Up, 1, 2), (Right, 0, 1)],
    [(Up, 0, 1), (Back, 0, 1)],
    [(Up, 1, 0), (Left, 0, 1)],
    [(Down, 0, 1), (Front, 2, 1)],
    [(Down, 1, 2), (Right, 2, 1)],
    [(Down, 2, 1), (Back, 2, 1)],
    [(Down, 1, 0), (Left, 2, 1)],
    [(Front, 1, 2), (Right, 1, 0)],
    [(Front, 1, 0), (Left, 1, 2)],
    [(Back, 1, 0), (Right, 1, 2)],
    [(Back, 1, 2), (Left, 1, 0)],
];

/// The 8 corner pieces as triples of physically touching stickers.
const CORNERS: [[Sticker; 3]; 8] = [
    [(Up, 2, 2), (Front, 0, 2), (Right, 0, 0)],
    [(Up, 2, 0), (Front, 0, 0), (Left, 0, 2)],
    [(Up, 0, 2), (Back, 0, 0), (Right, 0, 2)],
    [(Up, 0, 0), (Back, 0, 2), (Left, 0, 0)],
    [(Down, 0, 2), (Front, 2, 2), (Right, 2, 0)],
    [(Down, 0, 0), (Front, 2, 0), (Left, 2, 2)],
    [(Down, 2, 2), (Back, 2, 0), (Right, 2, 2)],
    [(Down, 2, 0), (Back, 2, 2), (Left, 2, 0)],
];

fn piece_colors(cube: &Cube, stickers: &[Sticker]) -> Vec<Color> {
    let mut colors: Vec<_> = stickers
        .iter()
        .map(|&(face, row, col)| cube[face].get(row, col))
        .collect();
    colors.sort();
    colors
}

/// Color sets of every piece, sorted. A solved cube defines the valid set.
fn pieces(cube: &Cube) -> Vec<Vec<Color>> {
    let mut all: Vec<_> = EDGES
        .iter()
        .map(|e| piece_colors(cube, e))
        .chain(CORNERS.iter().map(|c| piece_colors(cube, c)))
        .collect();
    all.sort();
    all
}

fn assert_invariants(cube: &Cube) {
    let counts = cube.color_counts();
    for color in Color::ALL {
        assert_eq!(counts.get(&color), Some(&9), "{color} count");
    }
    for face in FaceId::ALL {
        assert_eq!(cube[face].center(), face.home_color(), "{face} center");
    }
    assert_eq!(pieces(cube), pieces(&Cube::new()), "pieces broken apart");
}

fn arb_move() -> impl Strategy<Value = Move> {
    (0..6usize, 0..3usize).prop_map(|(f, t)| {
        let turn = [Turn::Clockwise, Turn::CounterClockwise, Turn::Double][t];
        Move::new(FaceId::ALL[f], turn)
    })
}

fn arb_sequence() -> impl Strategy<Value = MoveSequence> {
    prop::collection::vec(arb_move(), 0..40)
        .prop_map(|moves| moves.into_iter().collect::<MoveSequence>())
}

fn arb_face() -> impl Strategy<Value = FaceId> {
    (0..6usize).prop_map(|f| FaceId::ALL[f])
}

// =============================================================================
// Fixed sequences
// =============================================================================

/// Every single quarter turn keeps pieces whole.
#[test_log::test]
fn test_single_turns_keep_invariants() {
    for face in FaceId::ALL {
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            let mut cube = Cube::new();
            cube.rotate(face, direction);
            assert_invariants(&cube);
        }
    }
}

/// A long mixed sequence keeps every invariant.
#[test_log::test]
fn test_mixed_sequence_keeps_invariants() {
    let mut cube = Cube::new();
    for notation in ["F", "R", "U", "B", "L", "D", "F'", "R'", "U'", "F2", "R2"] {
        cube.apply_notation(notation).unwrap();
    }
    assert!(!cube.is_solved());
    assert_invariants(&cube);
}

/// `R U R' U'` has order 6.
#[test]
fn test_commutator_order() {
    let trigger: MoveSequence = "R U R' U'".parse().unwrap();
    let mut cube = Cube::new();
    for i in 1..=6 {
        cube.apply_sequence(&trigger);
        assert_eq!(cube.is_solved(), i == 6, "after {i} repetitions");
    }
}

/// Opposite faces commute.
#[test]
fn test_opposite_faces_commute() {
    for (a, b) in [(Up, Down), (Front, Back), (Left, Right)] {
        let mut ab = Cube::new();
        ab.rotate(a, Direction::Clockwise);
        ab.rotate(b, Direction::Clockwise);

        let mut ba = Cube::new();
        ba.rotate(b, Direction::Clockwise);
        ba.rotate(a, Direction::Clockwise);

        assert_eq!(ab, ba, "{a} and {b}");
    }
}

/// Adjacent faces do not commute.
#[test]
fn test_adjacent_faces_do_not_commute() {
    let mut fr = Cube::new();
    fr.apply_algorithm("F R").unwrap();
    let mut rf = Cube::new();
    rf.apply_algorithm("R F").unwrap();
    assert_ne!(fr, rf);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_sequences_keep_invariants(seq in arb_sequence()) {
        let mut cube = Cube::new();
        cube.apply_sequence(&seq);
        assert_invariants(&cube);
    }

    #[test]
    fn prop_four_turns_identity(seq in arb_sequence(), face in arb_face()) {
        let mut cube = Cube::new();
        cube.apply_sequence(&seq);
        let before = cube.clone();

        for _ in 0..4 {
            cube.rotate(face, Direction::Clockwise);
        }
        prop_assert_eq!(cube, before);
    }

    #[test]
    fn prop_inverse_law(seq in arb_sequence(), face in arb_face(), clockwise in any::<bool>()) {
        let mut cube = Cube::new();
        cube.apply_sequence(&seq);
        let before = cube.clone();

        let direction = Direction::from_clockwise(clockwise);
        cube.rotate(face, direction);
        cube.rotate(face, direction.inverse());
        prop_assert_eq!(cube, before);
    }

    #[test]
    fn prop_sequence_inverse_solves(seq in arb_sequence()) {
        let mut cube = Cube::new();
        cube.apply_sequence(&seq);
        cube.apply_sequence(&seq.inverse());
        prop_assert!(cube.is_solved());
    }

    #[test]
    fn prop_reset_restores_solved(seq in arb_sequence()) {
        let mut cube = Cube::new();
        cube.apply_sequence(&seq);
        cube.reset();
        prop_assert_eq!(cube, Cube::new());
    }

    #[test]
    fn prop_sequence_display_parses_back(seq in arb_sequence()) {
        let reparsed: MoveSequence = seq.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, seq);
    }
}
