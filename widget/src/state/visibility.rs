//! Open/close state machine for the chat window.
//!
//! `Closed -> Opening -> Open -> Closing -> Closed`. Every transition gets a
//! fresh generation; completing an older generation is a no-op, so a toggle
//! issued mid-animation supersedes the running one and the settled phase
//! always matches the last animation started.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::time::Duration;

use crate::util::animation::{AnimationFrame, CLOSED_FRAME, OPEN_FRAME, TRANSITION_DURATION};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// An animation that was started and must be settled when it completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub generation: u64,
    /// Phase entered when the transition started.
    pub phase: Phase,
    pub duration: Duration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    phase: Phase,
    generation: u64,
}

impl VisibilityState {
    /// Initial state for a freshly mounted widget.
    ///
    /// A widget configured as shown starts opening right away; otherwise it
    /// stays closed and no transition is returned.
    pub fn mounted(show: bool) -> (Self, Option<Transition>) {
        let mut state = Self::default();
        let transition = show.then(|| state.open());
        (state, transition)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The visibility flag: true once an open has settled, and until the
    /// following close settles.
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, Phase::Open | Phase::Closing)
    }

    /// Whether an animation is running.
    pub fn in_flight(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Closing)
    }

    /// Reverse the current direction: open when closed or closing, close
    /// when open or opening.
    pub fn toggle(&mut self) -> Transition {
        match self.phase {
            Phase::Closed | Phase::Closing => self.open(),
            Phase::Open | Phase::Opening => self.close(),
        }
    }

    pub fn open(&mut self) -> Transition {
        self.begin(Phase::Opening)
    }

    /// Start closing regardless of the current phase.
    pub fn close(&mut self) -> Transition {
        self.begin(Phase::Closing)
    }

    /// Complete the transition identified by `generation`.
    ///
    /// Returns `false` when that transition was superseded or nothing is in
    /// flight.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.phase {
            Phase::Opening => self.phase = Phase::Open,
            Phase::Closing => self.phase = Phase::Closed,
            Phase::Open | Phase::Closed => return false,
        }
        true
    }

    /// Keyframe the window is animating toward (or resting at).
    pub fn frame(&self) -> AnimationFrame {
        match self.phase {
            Phase::Opening | Phase::Open => OPEN_FRAME,
            Phase::Closing | Phase::Closed => CLOSED_FRAME,
        }
    }

    fn begin(&mut self, phase: Phase) -> Transition {
        self.generation += 1;
        self.phase = phase;
        log::debug!("visibility transition {} -> {phase:?}", self.generation);
        Transition { generation: self.generation, phase, duration: TRANSITION_DURATION }
    }
}
