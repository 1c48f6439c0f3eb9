//! Game state and the round state machine
//!
//! All state needed to resume or replay a session lives here and is
//! serializable. Timed phases are not driven by callbacks: each phase
//! installs a [`PhaseScript`] (an explicit list of cue/duration steps) and
//! the tick loop consumes it. Replacing the script replaces every pending
//! timed transition atomically, so a mid-phase reset can never leave a stale
//! timer behind.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::direction::{Direction, DisplaySymbol};
use super::sequence::SequenceController;
use super::tilt::TiltSampler;
use crate::consts::{COUNTDOWN_STEP_MS, RESOLVE_HOLD_MS, TILT_THRESHOLD, ms_to_ticks};

/// Current phase of a round
///
/// Transitions are total and cyclic: Countdown -> Reveal -> AwaitInput ->
/// Resolve -> Countdown. There is no terminal phase; the machine runs until
/// the host tears it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// "Ready" / "Set" / "Go" lead-in; tilt ignored
    Countdown,
    /// Timed playback of the target sequence; tilt ignored
    Reveal,
    /// The only phase that consumes tilt events
    AwaitInput,
    /// Outcome display hold before the next round
    Resolve,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Success,
    Failure,
}

/// Countdown step literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownStep {
    Ready,
    Set,
    Go,
}

impl CountdownStep {
    pub const ALL: [CountdownStep; 3] = [
        CountdownStep::Ready,
        CountdownStep::Set,
        CountdownStep::Go,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CountdownStep::Ready => "Ready",
            CountdownStep::Set => "Set",
            CountdownStep::Go => "Go",
        }
    }
}

/// What a script step puts on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Symbol(DisplaySymbol),
    Countdown(CountdownStep),
}

/// One timed step of a phase script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub cue: Cue,
    pub duration_ticks: u32,
}

/// The pending timed plan for the current phase
///
/// A plain data table consumed one tick at a time. `AwaitInput` runs with an
/// empty script (it waits on input, not time).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhaseScript {
    steps: Vec<ScriptStep>,
    index: usize,
    remaining_ticks: u32,
}

impl PhaseScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        let remaining_ticks = steps.first().map(|s| s.duration_ticks).unwrap_or(0);
        Self {
            steps,
            index: 0,
            remaining_ticks,
        }
    }

    /// Empty script (phase has no timed plan)
    pub fn idle() -> Self {
        Self::default()
    }

    /// The cue that should be showing right now
    pub fn current_cue(&self) -> Option<Cue> {
        self.steps.get(self.index).map(|s| s.cue)
    }

    pub fn finished(&self) -> bool {
        self.index >= self.steps.len()
    }

    /// Consume one tick; returns `false` once the script is exhausted.
    pub fn tick(&mut self) -> bool {
        if self.finished() {
            return false;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.index += 1;
            self.remaining_ticks = self
                .steps
                .get(self.index)
                .map(|s| s.duration_ticks)
                .unwrap_or(0);
        }
        !self.finished()
    }
}

/// Events emitted by the state machine for the host to consume
///
/// Drained once per frame via [`GameState::drain_events`]; purely
/// informational, the authoritative state is in the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged(RoundPhase),
    /// A tilt gesture was accepted as input
    InputAccepted(Direction),
    RoundResolved(RoundOutcome),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving all sequence generation
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: RoundPhase,
    /// The target sequence the player must reproduce
    pub sequence: SequenceController,
    /// Inputs accepted so far this round
    pub user_sequence: Vec<Direction>,
    /// Debounced tilt input
    pub sampler: TiltSampler,
    /// Classification threshold (from settings)
    pub tilt_threshold: f32,
    /// Consecutive successful rounds
    pub score: u32,
    /// Best score this session
    pub best_score: u32,
    /// What the display should show
    pub display: DisplaySymbol,
    /// Countdown literal, if the countdown is running
    pub countdown: Option<CountdownStep>,
    /// Outcome of the round being resolved
    pub outcome: Option<RoundOutcome>,
    /// Timed plan for the current phase
    pub(super) script: PhaseScript,
    /// Ticks left on the input echo display
    pub(super) echo_ticks: u32,
    /// Pending events for the host
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed, starting in Countdown.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let sequence = SequenceController::new(&mut rng);
        let mut state = Self {
            seed,
            rng,
            time_ticks: 0,
            phase: RoundPhase::Countdown,
            sequence,
            user_sequence: Vec::new(),
            sampler: TiltSampler::new(),
            tilt_threshold: TILT_THRESHOLD,
            score: 0,
            best_score: 0,
            display: DisplaySymbol::None,
            countdown: None,
            outcome: None,
            script: PhaseScript::idle(),
            echo_ticks: 0,
            events: Vec::new(),
        };
        state.enter_countdown();
        state
    }

    /// Take the events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Install the countdown script and enter the Countdown phase.
    pub(super) fn enter_countdown(&mut self) {
        self.phase = RoundPhase::Countdown;
        self.display = DisplaySymbol::None;
        self.outcome = None;
        self.echo_ticks = 0;
        self.script = PhaseScript::new(
            CountdownStep::ALL
                .iter()
                .map(|&step| ScriptStep {
                    cue: Cue::Countdown(step),
                    duration_ticks: ms_to_ticks(COUNTDOWN_STEP_MS),
                })
                .collect(),
        );
        log::debug!("phase -> Countdown");
        self.push_event(GameEvent::PhaseChanged(RoundPhase::Countdown));
    }

    /// Build the reveal script from the sequence controller's schedule.
    pub(super) fn enter_reveal(&mut self) {
        self.phase = RoundPhase::Reveal;
        self.countdown = None;
        let mut steps = Vec::new();
        for reveal in self.sequence.reveal_schedule() {
            steps.push(ScriptStep {
                cue: Cue::Symbol(DisplaySymbol::Direction(reveal.direction)),
                duration_ticks: ms_to_ticks(reveal.hold_ms),
            });
            if reveal.gap_ms > 0 {
                steps.push(ScriptStep {
                    cue: Cue::Symbol(DisplaySymbol::None),
                    duration_ticks: ms_to_ticks(reveal.gap_ms),
                });
            }
        }
        self.script = PhaseScript::new(steps);
        log::debug!("phase -> Reveal ({} cues)", self.sequence.len());
        self.push_event(GameEvent::PhaseChanged(RoundPhase::Reveal));
    }

    /// Clear the round's input state and start listening for tilt events.
    pub(super) fn enter_await_input(&mut self) {
        self.phase = RoundPhase::AwaitInput;
        self.user_sequence.clear();
        self.sampler.reset();
        self.display = DisplaySymbol::None;
        self.echo_ticks = 0;
        self.script = PhaseScript::idle();
        log::debug!("phase -> AwaitInput");
        self.push_event(GameEvent::PhaseChanged(RoundPhase::AwaitInput));
    }

    /// Apply the round outcome and hold it on the display.
    pub(super) fn enter_resolve(&mut self, outcome: RoundOutcome) {
        self.phase = RoundPhase::Resolve;
        self.outcome = Some(outcome);
        self.echo_ticks = 0;
        match outcome {
            RoundOutcome::Success => {
                self.score += 1;
                self.best_score = self.best_score.max(self.score);
                self.display = DisplaySymbol::Correct;
                self.sequence.extend(&mut self.rng);
            }
            RoundOutcome::Failure => {
                self.score = 0;
                self.display = DisplaySymbol::Incorrect;
                self.sequence.reset_to_single(&mut self.rng);
            }
        }
        self.script = PhaseScript::new(vec![ScriptStep {
            cue: Cue::Symbol(self.display),
            duration_ticks: ms_to_ticks(RESOLVE_HOLD_MS),
        }]);
        log::info!(
            "round resolved: {:?}, score={}, next target len={}",
            outcome,
            self.score,
            self.sequence.len()
        );
        self.push_event(GameEvent::PhaseChanged(RoundPhase::Resolve));
        self.push_event(GameEvent::RoundResolved(outcome));
    }

    /// Manual reset: back to Countdown with a fresh single-cue target.
    ///
    /// Synchronous and atomic - replacing the script cancels every pending
    /// timed transition, so nothing from the old phase can fire late.
    pub(super) fn manual_reset(&mut self) {
        self.score = 0;
        self.sequence.reset_to_single(&mut self.rng);
        self.user_sequence.clear();
        self.sampler.reset();
        log::info!("manual reset");
        self.enter_countdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_counting_down() {
        let state = GameState::new(123);
        assert_eq!(state.phase, RoundPhase::Countdown);
        assert_eq!(state.sequence.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(
            state.script.current_cue(),
            Some(Cue::Countdown(CountdownStep::Ready))
        );
    }

    #[test]
    fn test_phase_script_steps_through_cues() {
        let mut script = PhaseScript::new(vec![
            ScriptStep {
                cue: Cue::Countdown(CountdownStep::Ready),
                duration_ticks: 2,
            },
            ScriptStep {
                cue: Cue::Countdown(CountdownStep::Set),
                duration_ticks: 1,
            },
        ]);
        assert_eq!(script.current_cue(), Some(Cue::Countdown(CountdownStep::Ready)));
        assert!(script.tick());
        assert_eq!(script.current_cue(), Some(Cue::Countdown(CountdownStep::Ready)));
        assert!(script.tick());
        assert_eq!(script.current_cue(), Some(Cue::Countdown(CountdownStep::Set)));
        assert!(!script.tick());
        assert!(script.finished());
        assert_eq!(script.current_cue(), None);
    }

    #[test]
    fn test_idle_script_is_finished() {
        let mut script = PhaseScript::idle();
        assert!(script.finished());
        assert!(!script.tick());
    }

    #[test]
    fn test_serde_round_trip_preserves_state() {
        let mut state = GameState::new(77);
        state.enter_reveal();
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.phase, state.phase);
        assert_eq!(restored.sequence.target(), state.sequence.target());
        assert_eq!(restored.script.current_cue(), state.script.current_cue());
        assert_eq!(restored.time_ticks, state.time_ticks);
    }

    #[test]
    fn test_manual_reset_replaces_pending_script() {
        let mut state = GameState::new(9);
        state.enter_reveal();
        state.score = 4;
        state.manual_reset();
        assert_eq!(state.phase, RoundPhase::Countdown);
        assert_eq!(state.score, 0);
        assert_eq!(state.sequence.len(), 1);
        assert_eq!(
            state.script.current_cue(),
            Some(Cue::Countdown(CountdownStep::Ready))
        );
    }
}
