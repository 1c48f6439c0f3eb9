//! Fixed timestep game tick
//!
//! The single scheduler for the whole machine: every timed phase advances by
//! consuming its [`PhaseScript`](super::state::PhaseScript) here, one tick at
//! a time, and every tilt sample is processed to completion (including any
//! phase transition it causes) before the next tick's sample is considered.

use glam::Vec2;

use super::direction::{Direction, DisplaySymbol};
use super::state::{Cue, GameEvent, GameState, RoundOutcome, RoundPhase};
use crate::consts::{INPUT_ECHO_MS, ms_to_ticks};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Raw orientation sample that arrived since the last tick, if any.
    /// A silent sensor is an idle stream, not an error.
    pub orientation: Option<Vec2>,
    /// Manual reset control
    pub reset: bool,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.reset {
        state.manual_reset();
        return;
    }

    state.time_ticks += 1;

    match state.phase {
        RoundPhase::Countdown => {
            // Tilt ignored
            apply_cue(state);
            if !state.script.tick() {
                state.enter_reveal();
            }
        }

        RoundPhase::Reveal => {
            // Tilt ignored
            apply_cue(state);
            if !state.script.tick() {
                state.enter_await_input();
            }
        }

        RoundPhase::AwaitInput => {
            // Let the input echo fade back to neutral
            if state.echo_ticks > 0 {
                state.echo_ticks -= 1;
                if state.echo_ticks == 0 {
                    state.display = DisplaySymbol::None;
                }
            }

            if let Some(sample) = input.orientation
                && let Some(direction) = state.sampler.feed(sample, state.tilt_threshold)
            {
                handle_user_input(state, direction);
            }
        }

        RoundPhase::Resolve => {
            apply_cue(state);
            if !state.script.tick() {
                state.user_sequence.clear();
                state.display = DisplaySymbol::None;
                state.enter_countdown();
            }
        }
    }
}

/// Mirror the current script step onto the display outputs.
fn apply_cue(state: &mut GameState) {
    match state.script.current_cue() {
        Some(Cue::Symbol(symbol)) => {
            state.display = symbol;
            state.countdown = None;
        }
        Some(Cue::Countdown(step)) => {
            state.countdown = Some(step);
            state.display = DisplaySymbol::None;
        }
        None => {}
    }
}

/// Accept one debounced direction event during AwaitInput.
fn handle_user_input(state: &mut GameState, direction: Direction) {
    let index = state.user_sequence.len();

    // Guard ordering makes this unreachable; a breach is a contract bug,
    // not a user error.
    debug_assert!(
        index < state.sequence.len(),
        "user sequence outran target before resolution"
    );
    if index >= state.sequence.len() {
        log::error!(
            "user sequence length {} outran target length {}; forcing failure",
            index,
            state.sequence.len()
        );
        state.enter_resolve(RoundOutcome::Failure);
        return;
    }

    state.user_sequence.push(direction);
    state.push_event(GameEvent::InputAccepted(direction));
    log::debug!(
        "input {:?} at index {} (target {:?})",
        direction,
        index,
        state.sequence.target()[index]
    );

    // Echo the accepted input back on the display
    state.display = DisplaySymbol::Direction(direction);
    state.echo_ticks = ms_to_ticks(INPUT_ECHO_MS);

    if direction != state.sequence.target()[index] {
        state.enter_resolve(RoundOutcome::Failure);
    } else if state.user_sequence.len() == state.sequence.len() {
        state.enter_resolve(RoundOutcome::Success);
    }
    // Otherwise stay in AwaitInput for the next event.
}
