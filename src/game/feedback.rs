//! Feedback mapping
//!
//! Stateless translation from game state to rendering/haptic instructions.
//! Nothing here mutates the game; the host renders the frame and drives the
//! vibration motor.

use serde::{Deserialize, Serialize};

use super::direction::{Direction, DisplaySymbol};
use super::state::{GameState, RoundOutcome};
use crate::consts::{LONG_PULSE_MS, SHORT_PULSE_MS};

/// Haptic request intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HapticPulse {
    /// Soft success buzz
    Short,
    /// Aggressive failure buzz
    Long,
}

impl HapticPulse {
    pub fn duration_ms(&self) -> u32 {
        match self {
            HapticPulse::Short => SHORT_PULSE_MS,
            HapticPulse::Long => LONG_PULSE_MS,
        }
    }
}

/// What the host should put on screen this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackFrame {
    /// Glyph or countdown literal
    pub text: &'static str,
    pub score: u32,
    pub best_score: u32,
}

/// Display glyph for a symbol. Total over the closed tag set.
pub fn glyph(symbol: DisplaySymbol) -> &'static str {
    match symbol {
        DisplaySymbol::None => "",
        DisplaySymbol::Direction(Direction::Up) => "⬆️",
        DisplaySymbol::Direction(Direction::Down) => "⬇️",
        DisplaySymbol::Direction(Direction::Left) => "⬅️",
        DisplaySymbol::Direction(Direction::Right) => "➡️",
        DisplaySymbol::Correct => "✅",
        DisplaySymbol::Incorrect => "❌",
    }
}

/// Haptic request for a round outcome
pub fn haptic_for(outcome: RoundOutcome) -> HapticPulse {
    match outcome {
        RoundOutcome::Success => HapticPulse::Short,
        RoundOutcome::Failure => HapticPulse::Long,
    }
}

/// Build the frame for the current state. The countdown literal takes
/// precedence over the symbol glyph, matching the phase that produced it.
pub fn feedback_frame(state: &GameState) -> FeedbackFrame {
    let text = match state.countdown {
        Some(step) => step.as_str(),
        None => glyph(state.display),
    };
    FeedbackFrame {
        text,
        score: state.score,
        best_score: state.best_score,
    }
}
