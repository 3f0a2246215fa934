//! Random move sequences.
//!
//! Consecutive moves never turn the same face, so no move cancels or merges
//! with the one before it.

use log::debug;

use super::config::ScrambleConfig;
use super::rng::ScrambleRng;
use crate::core::{Cube, FaceId};
use crate::notation::{Move, MoveSequence, Turn};

const QUARTER_TURNS: [Turn; 2] = [Turn::Clockwise, Turn::CounterClockwise];
const ALL_TURNS: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Double];

/// Generates scrambles from a [`ScrambleConfig`].
#[derive(Clone, Debug)]
pub struct Scrambler {
    config: ScrambleConfig,
    rng: ScrambleRng,
}

impl Scrambler {
    /// Create a scrambler. Uses the configured seed, or OS entropy.
    #[must_use]
    pub fn new(config: ScrambleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ScrambleRng::new(seed),
            None => ScrambleRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ScrambleConfig {
        &self.config
    }

    /// The RNG, e.g. to checkpoint its state.
    #[must_use]
    pub fn rng(&self) -> &ScrambleRng {
        &self.rng
    }

    /// Generate the next scramble.
    pub fn generate(&mut self) -> MoveSequence {
        let turns: &[Turn] = if self.config.allow_double_turns {
            &ALL_TURNS
        } else {
            &QUARTER_TURNS
        };

        let mut sequence = MoveSequence::new();
        let mut last: Option<FaceId> = None;
        while sequence.len() < self.config.length {
            let face = FaceId::ALL[self.rng.gen_range(0..FaceId::ALL.len())];
            if last == Some(face) {
                continue;
            }
            let turn = turns[self.rng.gen_range(0..turns.len())];
            sequence.push(Move::new(face, turn));
            last = Some(face);
        }

        debug!("generated scramble (seed {}): {sequence}", self.rng.seed());
        sequence
    }

    /// Generate a scramble and apply it to `cube`.
    pub fn scramble(&mut self, cube: &mut Cube) -> MoveSequence {
        let sequence = self.generate();
        cube.apply_sequence(&sequence);
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let mut scrambler = Scrambler::new(ScrambleConfig::new().with_length(40).with_seed(1));
        assert_eq!(scrambler.generate().len(), 40);

        let mut empty = Scrambler::new(ScrambleConfig::new().with_length(0).with_seed(1));
        assert!(empty.generate().is_empty());
    }

    #[test]
    fn test_same_seed_same_scramble() {
        let config = ScrambleConfig::new().with_seed(42);
        let a = Scrambler::new(config.clone()).generate();
        let b = Scrambler::new(config).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_scrambles_differ() {
        let mut scrambler = Scrambler::new(ScrambleConfig::new().with_seed(42));
        assert_ne!(scrambler.generate(), scrambler.generate());
    }

    #[test]
    fn test_no_repeated_faces() {
        let mut scrambler = Scrambler::new(ScrambleConfig::new().with_length(200).with_seed(3));
        let seq = scrambler.generate();
        assert!(seq.moves().windows(2).all(|w| w[0].face != w[1].face));
    }

    #[test]
    fn test_quarter_turns_only() {
        let config = ScrambleConfig::new()
            .with_length(200)
            .with_seed(5)
            .quarter_turns_only();
        let seq = Scrambler::new(config).generate();
        assert!(seq.iter().all(|mv| mv.turn != Turn::Double));
    }

    #[test]
    fn test_scramble_applies_to_cube() {
        let mut scrambler = Scrambler::new(ScrambleConfig::new().with_seed(11));
        let mut cube = Cube::new();
        let seq = scrambler.scramble(&mut cube);

        let mut replay = Cube::new();
        replay.apply_sequence(&seq);
        assert_eq!(cube, replay);

        cube.apply_sequence(&seq.inverse());
        assert!(cube.is_solved());
    }
}
