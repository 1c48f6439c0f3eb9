//! Target sequence ownership and reveal scheduling

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::consts::{CUE_GAP_MS, CUE_HOLD_MS};

/// One step of the reveal playback schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealStep {
    pub direction: Direction,
    /// How long the cue is shown
    pub hold_ms: u32,
    /// Neutral gap after the cue (zero on the last step)
    pub gap_ms: u32,
}

/// Owns the target sequence the player must reproduce
///
/// The sequence is read-only to the rest of the game: it grows by one on
/// round success and collapses back to a single fresh direction on failure
/// or manual reset. It is never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceController {
    target: Vec<Direction>,
}

impl SequenceController {
    /// Start with a single random direction
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            target: vec![Direction::random(rng)],
        }
    }

    /// Read-only view of the target sequence
    pub fn target(&self) -> &[Direction] {
        &self.target
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Append one random direction. Called only on round success.
    pub fn extend(&mut self, rng: &mut Pcg32) {
        self.target.push(Direction::random(rng));
    }

    /// Replace the sequence with exactly one fresh random direction.
    /// Called on round failure and manual reset.
    pub fn reset_to_single(&mut self, rng: &mut Pcg32) {
        self.target.clear();
        self.target.push(Direction::random(rng));
    }

    /// Playback schedule for the reveal phase: each cue held for
    /// [`CUE_HOLD_MS`] followed by a [`CUE_GAP_MS`] neutral gap, except no
    /// gap trails the final cue.
    pub fn reveal_schedule(&self) -> Vec<RevealStep> {
        let last = self.target.len().saturating_sub(1);
        self.target
            .iter()
            .enumerate()
            .map(|(i, &direction)| RevealStep {
                direction,
                hold_ms: CUE_HOLD_MS,
                gap_ms: if i == last { 0 } else { CUE_GAP_MS },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn controller(seed: u64) -> (SequenceController, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let controller = SequenceController::new(&mut rng);
        (controller, rng)
    }

    #[test]
    fn test_starts_with_one_direction() {
        let (controller, _) = controller(1);
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn test_extend_appends_one() {
        let (mut controller, mut rng) = controller(2);
        let before = controller.target().to_vec();
        controller.extend(&mut rng);
        assert_eq!(controller.len(), before.len() + 1);
        assert_eq!(&controller.target()[..before.len()], &before[..]);
    }

    #[test]
    fn test_reset_to_single_collapses() {
        let (mut controller, mut rng) = controller(3);
        for _ in 0..5 {
            controller.extend(&mut rng);
        }
        assert_eq!(controller.len(), 6);
        controller.reset_to_single(&mut rng);
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn test_reveal_schedule_timing() {
        let (mut controller, mut rng) = controller(4);
        controller.extend(&mut rng);
        controller.extend(&mut rng);

        let schedule = controller.reveal_schedule();
        assert_eq!(schedule.len(), 3);
        for step in &schedule[..2] {
            assert_eq!(step.hold_ms, CUE_HOLD_MS);
            assert_eq!(step.gap_ms, CUE_GAP_MS);
        }
        assert_eq!(schedule[2].gap_ms, 0, "no trailing gap");

        // Total duration = len * (hold + gap) - trailing gap
        let total: u32 = schedule.iter().map(|s| s.hold_ms + s.gap_ms).sum();
        assert_eq!(total, 3 * (CUE_HOLD_MS + CUE_GAP_MS) - CUE_GAP_MS);
    }

    #[test]
    fn test_schedule_order_matches_target() {
        let (mut controller, mut rng) = controller(5);
        for _ in 0..4 {
            controller.extend(&mut rng);
        }
        let directions: Vec<_> = controller
            .reveal_schedule()
            .iter()
            .map(|s| s.direction)
            .collect();
        assert_eq!(directions, controller.target());
    }
}
