//! Output signal set and its nominal timing.

use crate::config::Timing;

/// Output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    MasterClock,
    BitClock,
    WordSelect,
    SerialData,
}

/// Snapshot of the output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransmissionPort {
    /// Master clock cycles passed through since power-up.
    pub mclk_cycles: u64,
    pub bclk: bool,
    pub ws: bool,
    pub sd: bool,
}

impl TransmissionPort {
    /// Level of a generated line. The master clock is passed through unchanged
    /// and a once-per-cycle snapshot has no level for it, so it yields `None`.
    #[inline]
    pub fn level(&self, line: Line) -> Option<bool> {
        match line {
            Line::MasterClock => None,
            Line::BitClock => Some(self.bclk),
            Line::WordSelect => Some(self.ws),
            Line::SerialData => Some(self.sd),
        }
    }
}

/// Nominal frequency of every line, for downstream timing checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortTiming {
    pub mclk_hz: u32,
    pub bclk_hz: u32,
    pub ws_hz: u32,
    /// Bit rate of the data line.
    pub sd_hz: u32,
}

impl PortTiming {
    pub const LINES: [Line; 4] = [
        Line::MasterClock,
        Line::BitClock,
        Line::WordSelect,
        Line::SerialData,
    ];

    pub fn new(timing: &Timing) -> Self {
        Self {
            mclk_hz: timing.master_clock_hz,
            bclk_hz: timing.bit_clock_hz,
            ws_hz: timing.word_select_hz,
            sd_hz: timing.bit_clock_hz,
        }
    }

    #[inline]
    pub fn frequency(&self, line: Line) -> u32 {
        match line {
            Line::MasterClock => self.mclk_hz,
            Line::BitClock => self.bclk_hz,
            Line::WordSelect => self.ws_hz,
            Line::SerialData => self.sd_hz,
        }
    }

    /// Period constraint of a line in nanoseconds.
    #[inline]
    pub fn period_ns(&self, line: Line) -> f64 {
        1e9 / self.frequency(line) as f64
    }
}
