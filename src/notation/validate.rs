//! Request-shape validation.
//!
//! These checks sit in front of the engine for callers that want a clear
//! rejection before touching a cube. The engine repeats its own checks, so
//! skipping validation is never unsafe.

use super::moves::Move;
use crate::core::{CubeError, CubeResult, FaceId};

/// Check a face identifier (`front, back, up, down, left, right`).
///
/// Empty input reads "face cannot be empty".
pub fn validate_face(face: &str) -> CubeResult<FaceId> {
    FaceId::from_name(face)
}

/// Check a single move against `[FBUDLR]('|2)?`.
///
/// Empty input reads "notation cannot be empty".
pub fn validate_notation(notation: &str) -> CubeResult<Move> {
    notation.parse()
}

/// Whether `err` was raised for the face field or the notation field.
#[must_use]
pub fn field_name(err: &CubeError) -> &'static str {
    match err {
        CubeError::InvalidFace(_) => "face",
        CubeError::InvalidNotation(_) => "notation",
        CubeError::Snapshot(_) => "cube",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Turn;

    #[test]
    fn test_validate_face() {
        assert_eq!(validate_face("left"), Ok(FaceId::Left));
        let err = validate_face("").unwrap_err();
        assert_eq!(err, CubeError::InvalidFace(String::new()));
        assert_eq!(err.to_string(), "face cannot be empty");
        assert_eq!(
            validate_face("LEFT"),
            Err(CubeError::InvalidFace("LEFT".into()))
        );
    }

    #[test]
    fn test_validate_notation() {
        assert_eq!(
            validate_notation("U2"),
            Ok(Move::new(FaceId::Up, Turn::Double))
        );
        let err = validate_notation("").unwrap_err();
        assert_eq!(err, CubeError::InvalidNotation(String::new()));
        assert_eq!(err.to_string(), "notation cannot be empty");
        assert!(validate_notation("U3").is_err());
        assert!(validate_notation("UU").is_err());
        assert_eq!(
            validate_notation("X").unwrap_err().to_string(),
            "invalid move notation: X. Valid examples: \
             F, B, U, D, L, R, F', B', U', D', L', R', F2, B2, U2, D2, L2, R2"
        );
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name(&CubeError::InvalidFace("x".into())), "face");
        assert_eq!(field_name(&CubeError::InvalidNotation(String::new())), "notation");
        assert_eq!(field_name(&CubeError::Snapshot("eof".into())), "cube");
    }
}
