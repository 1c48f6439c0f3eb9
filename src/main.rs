//! Tilt Simon demo entry point
//!
//! Headless driver: plays three perfect rounds and then one deliberate miss,
//! synthesizing accelerometer samples from the target sequence and printing
//! the feedback frames a real view layer would render.

use glam::Vec2;

use tilt_simon::Settings;
use tilt_simon::game::{
    Direction, GameEvent, GameState, RoundPhase, TickInput, feedback_frame, haptic_for,
    sample_for, tick,
};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2024);
    log::info!("Tilt Simon (headless demo) starting, seed {seed}");

    let settings = Settings::default();
    let mut state = GameState::new(seed);

    let mut resolved_rounds = 0u32;
    let mut neutral_next = false;
    let mut last_text = String::new();

    while resolved_rounds < 4 {
        let input = if state.phase == RoundPhase::AwaitInput {
            // Alternate tilt and neutral samples so each gesture re-arms
            let sample = if neutral_next {
                Vec2::ZERO
            } else {
                let index = state.user_sequence.len();
                let mut direction = state.sequence.target()[index];
                if resolved_rounds == 3 {
                    // Miss on purpose in the final round
                    direction = *Direction::ALL.iter().find(|d| **d != direction).unwrap();
                }
                sample_for(direction)
            };
            neutral_next = !neutral_next;
            TickInput {
                orientation: Some(sample),
                reset: false,
            }
        } else {
            TickInput::default()
        };

        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::RoundResolved(outcome) => {
                    resolved_rounds += 1;
                    if let Some(pulse) = settings.effective_pulse(haptic_for(outcome)) {
                        log::info!("haptic: {:?} ({} ms)", pulse, pulse.duration_ms());
                    }
                }
                GameEvent::PhaseChanged(phase) => log::debug!("phase: {phase:?}"),
                GameEvent::InputAccepted(direction) => log::debug!("input: {direction:?}"),
            }
        }

        let frame = feedback_frame(&state);
        if frame.text != last_text.as_str() {
            println!(
                "[tick {:>5}] {:<8} score {}",
                state.time_ticks, frame.text, frame.score
            );
            last_text = frame.text.to_string();
        }
    }

    println!(
        "demo done: score {}, session best {}",
        state.score, state.best_score
    );
}
