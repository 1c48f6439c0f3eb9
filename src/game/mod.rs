//! Deterministic game core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host feeds orientation samples and a reset flag into [`tick`] once per
//! timestep and renders from [`feedback::feedback_frame`].

pub mod direction;
pub mod feedback;
pub mod sequence;
pub mod state;
pub mod tick;
pub mod tilt;

pub use direction::{Direction, DisplaySymbol};
pub use feedback::{FeedbackFrame, HapticPulse, feedback_frame, glyph, haptic_for};
pub use sequence::{RevealStep, SequenceController};
pub use state::{
    CountdownStep, Cue, GameEvent, GameState, PhaseScript, RoundOutcome, RoundPhase, ScriptStep,
};
pub use tick::{TickInput, tick};
pub use tilt::{TiltSampler, classify, sample_for};
