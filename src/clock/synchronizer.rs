//! Synchronizer carrying the divider's clocks into the control domain.
//!
//! Each line passes a first stage, a synchronized stage and a delayed copy of
//! the synchronized stage. Edge pulses are registered from the synchronized and
//! delayed stages of the previous tick, so the live fast-domain level is never
//! compared directly and every transition shows up as a pulse of exactly one
//! control tick.

use crate::config::ShiftEdge;
use crate::error::TimingViolation;
use crate::tx::port::Line;
use crate::verify::Verifier;

/// Control ticks a synchronized level has to be held to count as clean.
pub const MIN_STABLE_TICKS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeState {
    pub bclk_meta: bool,
    pub bclk: bool,
    pub bclk_prev: bool,

    pub ws_meta: bool,
    pub ws: bool,
    pub ws_prev: bool,

    pub bclk_rise: bool,
    pub bclk_fall: bool,
    pub ws_rise: bool,
    pub ws_fall: bool,
}

impl EdgeState {
    /// All stages at the given levels, no pulses.
    pub fn idle(bclk: bool, ws: bool) -> Self {
        Self {
            bclk_meta: bclk,
            bclk,
            bclk_prev: bclk,
            ws_meta: ws,
            ws,
            ws_prev: ws,
            ..Default::default()
        }
    }

    /// Pulse of the given bit clock edge.
    #[inline]
    pub fn bclk_edge(&self, edge: ShiftEdge) -> bool {
        match edge {
            ShiftEdge::Falling => self.bclk_fall,
            ShiftEdge::Rising => self.bclk_rise,
        }
    }

    #[inline]
    pub fn ws_edge(&self) -> bool {
        self.ws_rise || self.ws_fall
    }

    #[inline]
    pub fn any_pulse(&self) -> bool {
        self.bclk_rise || self.bclk_fall || self.ws_rise || self.ws_fall
    }
}

#[derive(Debug, Clone, Default)]
pub struct Synchronizer {
    state: EdgeState,
    reset_state: EdgeState,
    bclk_held: u32,
    ws_held: u32,
}

impl Synchronizer {
    pub fn new(bclk: bool, ws: bool) -> Self {
        let reset_state = EdgeState::idle(bclk, ws);

        Self {
            state: reset_state,
            reset_state,
            bclk_held: MIN_STABLE_TICKS,
            ws_held: MIN_STABLE_TICKS,
        }
    }

    pub fn reset(&mut self) {
        self.state = self.reset_state;
        self.bclk_held = MIN_STABLE_TICKS;
        self.ws_held = MIN_STABLE_TICKS;
    }

    /// Samples the live levels and registers the pulses of the previous snapshot.
    #[inline]
    pub fn tick(&mut self, bclk: bool, ws: bool, verifier: &mut Verifier) {
        let s = self.state;

        self.bclk_held = hold(self.bclk_held, s.bclk, s.bclk_meta, Line::BitClock, verifier);
        self.ws_held = hold(self.ws_held, s.ws, s.ws_meta, Line::WordSelect, verifier);

        self.state = EdgeState {
            bclk_meta: bclk,
            bclk: s.bclk_meta,
            bclk_prev: s.bclk,
            ws_meta: ws,
            ws: s.ws_meta,
            ws_prev: s.ws,
            bclk_rise: s.bclk && !s.bclk_prev,
            bclk_fall: !s.bclk && s.bclk_prev,
            ws_rise: s.ws && !s.ws_prev,
            ws_fall: !s.ws && s.ws_prev,
        };
    }

    #[inline]
    pub fn state(&self) -> EdgeState {
        self.state
    }

    #[inline]
    pub fn reset_state(&self) -> EdgeState {
        self.reset_state
    }
}

/// Counts how long the synchronized level has been held and flags short levels.
#[inline]
fn hold(held: u32, current: bool, next: bool, line: Line, verifier: &mut Verifier) -> u32 {
    if current == next {
        held.saturating_add(1)
    } else {
        if held < MIN_STABLE_TICKS {
            verifier.flag(TimingViolation::GlitchWindow { line });
        }
        1
    }
}
