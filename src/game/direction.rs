//! Direction vocabulary
//!
//! The four discrete tilt symbols and the display superset used for output.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// A discrete tilt direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Draw a uniformly distributed direction from the given RNG
    pub fn random(rng: &mut Pcg32) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        }
    }
}

/// What the display is currently showing
///
/// Output-only superset of [`Direction`]; never used for input matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplaySymbol {
    /// Neutral/idle, nothing shown
    #[default]
    None,
    /// A directional cue (reveal playback or input echo)
    Direction(Direction),
    /// Round won
    Correct,
    /// Round lost
    Incorrect,
}
