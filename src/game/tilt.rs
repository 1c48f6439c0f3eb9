//! Tilt sampling and edge detection
//!
//! Converts continuous 2-axis orientation readings into discrete direction
//! events. Classification is thresholded and checked horizontal-first; the
//! horizontal sign is inverted relative to the device frame (tilting the
//! device right drives x negative), which is the intended mapping.
//!
//! Edge detection lives in [`TiltSampler`]: a held tilt produces exactly one
//! event, and a neutral sample re-arms the same direction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Classify a raw orientation sample against a threshold.
///
/// Returns `None` for the neutral zone. The checks are mutually exclusive
/// and ordered: horizontal before vertical.
pub fn classify(sample: Vec2, threshold: f32) -> Option<Direction> {
    if sample.x < -threshold {
        Some(Direction::Right)
    } else if sample.x > threshold {
        Some(Direction::Left)
    } else if sample.y < -threshold {
        Some(Direction::Up)
    } else if sample.y > threshold {
        Some(Direction::Down)
    } else {
        None
    }
}

/// A representative raw sample that classifies as the given direction.
///
/// Inverse of [`classify`] at full deflection; used by tests and the demo
/// driver to synthesize sensor input.
pub fn sample_for(direction: Direction) -> Vec2 {
    match direction {
        Direction::Right => Vec2::new(-1.0, 0.0),
        Direction::Left => Vec2::new(1.0, 0.0),
        Direction::Up => Vec2::new(0.0, -1.0),
        Direction::Down => Vec2::new(0.0, 1.0),
    }
}

/// Debounced sampler over the raw orientation stream
///
/// Emits a direction only on the transition into it, so one physical tilt
/// yields one event regardless of how many samples register it. An absent
/// sensor is just an absence of [`feed`](Self::feed) calls - an idle stream,
/// never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TiltSampler {
    last_processed: Option<Direction>,
}

impl TiltSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw sample; returns a direction event on transition.
    pub fn feed(&mut self, sample: Vec2, threshold: f32) -> Option<Direction> {
        match classify(sample, threshold) {
            Some(direction) if self.last_processed != Some(direction) => {
                self.last_processed = Some(direction);
                Some(direction)
            }
            Some(_) => None,
            None => {
                // Back to neutral - re-arm
                self.last_processed = None;
                None
            }
        }
    }

    /// Forget the held direction so the next non-neutral sample emits.
    pub fn reset(&mut self) {
        self.last_processed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TILT_THRESHOLD;

    #[test]
    fn test_classify_inverted_horizontal() {
        // Physical right tilt drives x negative
        assert_eq!(
            classify(Vec2::new(-0.8, 0.0), TILT_THRESHOLD),
            Some(Direction::Right)
        );
        assert_eq!(
            classify(Vec2::new(0.8, 0.0), TILT_THRESHOLD),
            Some(Direction::Left)
        );
        assert_eq!(
            classify(Vec2::new(0.0, -0.8), TILT_THRESHOLD),
            Some(Direction::Up)
        );
        assert_eq!(
            classify(Vec2::new(0.0, 0.8), TILT_THRESHOLD),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_classify_neutral_zone() {
        assert_eq!(classify(Vec2::new(0.0, 0.0), TILT_THRESHOLD), None);
        assert_eq!(classify(Vec2::new(0.5, 0.5), TILT_THRESHOLD), None);
        assert_eq!(classify(Vec2::new(-0.49, 0.49), TILT_THRESHOLD), None);
    }

    #[test]
    fn test_classify_horizontal_wins_over_vertical() {
        assert_eq!(
            classify(Vec2::new(-0.9, -0.9), TILT_THRESHOLD),
            Some(Direction::Right)
        );
        assert_eq!(
            classify(Vec2::new(0.9, 0.9), TILT_THRESHOLD),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_held_tilt_emits_once() {
        let mut sampler = TiltSampler::new();
        let up = Vec2::new(0.0, -1.0);
        assert_eq!(sampler.feed(up, TILT_THRESHOLD), Some(Direction::Up));
        for _ in 0..9 {
            assert_eq!(sampler.feed(up, TILT_THRESHOLD), None);
        }
    }

    #[test]
    fn test_neutral_rearms_same_direction() {
        let mut sampler = TiltSampler::new();
        let up = Vec2::new(0.0, -1.0);
        assert_eq!(sampler.feed(up, TILT_THRESHOLD), Some(Direction::Up));
        assert_eq!(sampler.feed(Vec2::ZERO, TILT_THRESHOLD), None);
        assert_eq!(sampler.feed(up, TILT_THRESHOLD), Some(Direction::Up));
    }

    #[test]
    fn test_direction_change_emits_without_neutral() {
        // Swinging straight from one direction to another counts as a new
        // gesture even without passing through neutral.
        let mut sampler = TiltSampler::new();
        assert_eq!(
            sampler.feed(Vec2::new(1.0, 0.0), TILT_THRESHOLD),
            Some(Direction::Left)
        );
        assert_eq!(
            sampler.feed(Vec2::new(-1.0, 0.0), TILT_THRESHOLD),
            Some(Direction::Right)
        );
    }

    #[test]
    fn test_consecutive_neutrals_are_idempotent() {
        let mut sampler = TiltSampler::new();
        for _ in 0..10 {
            assert_eq!(sampler.feed(Vec2::ZERO, TILT_THRESHOLD), None);
        }
        assert_eq!(
            sampler.feed(Vec2::new(0.0, -1.0), TILT_THRESHOLD),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_reset_rearms() {
        let mut sampler = TiltSampler::new();
        let down = Vec2::new(0.0, 1.0);
        assert_eq!(sampler.feed(down, TILT_THRESHOLD), Some(Direction::Down));
        sampler.reset();
        assert_eq!(sampler.feed(down, TILT_THRESHOLD), Some(Direction::Down));
    }

    #[test]
    fn test_sample_for_round_trips() {
        for direction in Direction::ALL {
            assert_eq!(
                classify(sample_for(direction), TILT_THRESHOLD),
                Some(direction)
            );
        }
    }
}
