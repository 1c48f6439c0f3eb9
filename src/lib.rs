//! Tilt Simon - a tilt-to-repeat memory reflex game
//!
//! The device shows a growing sequence of directional cues, the player
//! reproduces it by tilting the device, the score climbs on success and
//! resets on failure.
//!
//! Core modules:
//! - `game`: Deterministic game core (tilt classification, sequence control,
//!   round state machine, feedback mapping)
//! - `settings`: Runtime-tunable preferences

pub mod game;
pub mod settings;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds (host pacing)
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Tilt magnitude beyond which a sample classifies as a direction
    pub const TILT_THRESHOLD: f32 = 0.5;
    /// Nominal accelerometer sample interval (best-effort, not enforced)
    pub const SAMPLE_INTERVAL_MS: u32 = 100;

    /// Countdown step hold ("Ready" / "Set" / "Go")
    pub const COUNTDOWN_STEP_MS: u32 = 1000;
    /// Reveal: how long each cue in the target sequence is shown
    pub const CUE_HOLD_MS: u32 = 1000;
    /// Reveal: neutral gap between cues
    pub const CUE_GAP_MS: u32 = 500;
    /// How long an accepted input is echoed back on the display
    pub const INPUT_ECHO_MS: u32 = 500;
    /// How long the Correct/Incorrect outcome is held before the next round
    pub const RESOLVE_HOLD_MS: u32 = 2000;

    /// Haptic pulse lengths
    pub const SHORT_PULSE_MS: u32 = 100;
    pub const LONG_PULSE_MS: u32 = 500;

    /// Convert a millisecond duration to simulation ticks
    pub const fn ms_to_ticks(ms: u32) -> u32 {
        ms * TICK_HZ / 1000
    }
}
