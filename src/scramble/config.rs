//! Scramble configuration.
//!
//! Built with chained setters:
//!
//! ```
//! use cube_engine::scramble::ScrambleConfig;
//!
//! let config = ScrambleConfig::new()
//!     .with_length(30)
//!     .with_seed(1234)
//!     .quarter_turns_only();
//!
//! assert_eq!(config.length, 30);
//! assert!(!config.allow_double_turns);
//! ```

use serde::{Deserialize, Serialize};

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Settings for [`Scrambler`](super::Scrambler).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Number of moves to generate.
    pub length: usize,

    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Allow `X2` moves in addition to quarter turns.
    pub allow_double_turns: bool,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            allow_double_turns: true,
        }
    }
}

impl ScrambleConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scramble length.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Fix the RNG seed for reproducible scrambles.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate only `X` and `X'` moves.
    #[must_use]
    pub fn quarter_turns_only(mut self) -> Self {
        self.allow_double_turns = false;
        self
    }
}
