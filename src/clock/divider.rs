//! Bit clock and word-select clock divider, running at the master clock rate.

use crate::config::Timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockState {
    /// Master ticks since the last bit clock toggle.
    pub bclk_count: u32,
    /// Master ticks since the last word-select toggle.
    pub ws_count: u32,
    pub bclk: bool,
    pub ws: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ClockDivider {
    state: ClockState,
    reset_state: ClockState,
    bclk_threshold: u32,
    ws_threshold: u32,
}

impl ClockDivider {
    pub fn new(timing: &Timing, bclk: bool, ws: bool) -> Self {
        let reset_state = ClockState {
            bclk_count: 0,
            ws_count: 0,
            bclk,
            ws,
        };

        Self {
            state: reset_state,
            reset_state,
            bclk_threshold: timing.bclk_half_period,
            ws_threshold: timing.ws_half_period,
        }
    }

    pub fn reset(&mut self) {
        self.state = self.reset_state;
    }

    #[inline]
    pub fn tick(&mut self) {
        self.state.bclk_count += 1;
        if self.state.bclk_count >= self.bclk_threshold {
            self.state.bclk_count = 0;
            self.state.bclk = !self.state.bclk;
        }

        self.state.ws_count += 1;
        if self.state.ws_count >= self.ws_threshold {
            self.state.ws_count = 0;
            self.state.ws = !self.state.ws;
        }
    }

    #[inline]
    pub fn bclk(&self) -> bool {
        self.state.bclk
    }

    #[inline]
    pub fn ws(&self) -> bool {
        self.state.ws
    }

    #[inline]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[inline]
    pub fn reset_state(&self) -> ClockState {
        self.reset_state
    }

    #[inline]
    pub fn bclk_threshold(&self) -> u32 {
        self.bclk_threshold
    }

    #[inline]
    pub fn ws_threshold(&self) -> u32 {
        self.ws_threshold
    }
}
