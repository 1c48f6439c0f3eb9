//! Game settings and preferences
//!
//! Owned by the host; the core only reads the tilt threshold (via
//! `GameState::tilt_threshold`) and the effective haptic pulses.

use serde::{Deserialize, Serialize};

use crate::consts::TILT_THRESHOLD;
use crate::game::HapticPulse;

/// Runtime-tunable preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Vibrate on round outcomes
    pub haptics: bool,
    /// Tilt magnitude required to register a direction
    pub tilt_threshold: f32,
    /// Tone down feedback (failure pulse downgraded to a short one)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            haptics: true,
            tilt_threshold: TILT_THRESHOLD,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective haptic request (respects haptics toggle and reduced_motion)
    pub fn effective_pulse(&self, pulse: HapticPulse) -> Option<HapticPulse> {
        if !self.haptics {
            return None;
        }
        if self.reduced_motion {
            Some(HapticPulse::Short)
        } else {
            Some(pulse)
        }
    }
}
