//! Reproducible random scrambles.

pub mod config;
pub mod rng;
pub mod scrambler;

pub use config::{ScrambleConfig, DEFAULT_SCRAMBLE_LENGTH};
pub use rng::{ScrambleRng, ScrambleRngState};
pub use scrambler::Scrambler;
