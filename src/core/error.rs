//! Engine errors.
//!
//! Every error is a rejected input: the cube is left exactly as it was.

use thiserror::Error;

/// Errors returned by cube operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// The face identifier is empty or not one of
    /// `front, back, up, down, left, right`. Holds the rejected input.
    #[error("{}", face_message(.0))]
    InvalidFace(String),

    /// The move notation is empty or could not be parsed. Holds the
    /// rejected input.
    #[error("{}", notation_message(.0))]
    InvalidNotation(String),

    /// A serialized cube could not be encoded or decoded.
    #[error("invalid cube snapshot: {0}")]
    Snapshot(String),
}

fn face_message(face: &str) -> String {
    if face.is_empty() {
        "face cannot be empty".to_string()
    } else {
        format!("invalid face: {face}. Valid faces are: front, back, up, down, left, right")
    }
}

fn notation_message(notation: &str) -> String {
    if notation.is_empty() {
        "notation cannot be empty".to_string()
    } else {
        format!(
            "invalid move notation: {notation}. Valid examples: \
             F, B, U, D, L, R, F', B', U', D', L', R', F2, B2, U2, D2, L2, R2"
        )
    }
}

impl CubeError {
    /// Whether this error came from a notation string.
    #[must_use]
    pub fn is_notation(&self) -> bool {
        matches!(self, CubeError::InvalidNotation(_))
    }

    /// Whether the rejected input was the empty string.
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        match self {
            CubeError::InvalidFace(input) | CubeError::InvalidNotation(input) => input.is_empty(),
            CubeError::Snapshot(_) => false,
        }
    }
}

impl From<serde_json::Error> for CubeError {
    fn from(err: serde_json::Error) -> Self {
        CubeError::Snapshot(err.to_string())
    }
}

impl From<bincode::Error> for CubeError {
    fn from(err: bincode::Error) -> Self {
        CubeError::Snapshot(err.to_string())
    }
}

/// Result alias for cube operations.
pub type CubeResult<T> = Result<T, CubeError>;
