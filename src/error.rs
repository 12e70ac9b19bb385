//! Configuration errors and timing violations.

use core::fmt;

use crate::config::Channel;
use crate::tx::port::Line;

/// Rejected configuration. The engine does not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Master clock is not an integer multiple of twice the bit clock.
    InvalidRatio { master_clock_hz: u32, bit_clock_hz: u64 },
    /// Sample source has no frames.
    InvalidTableLength,
    /// Serializer word width differs from the source width.
    WidthMismatch { expected: u32, found: u32 },
    /// A stored sample does not fit into the source width.
    SampleOutOfRange { index: usize, value: i32, bits: u32 },
    /// Control clock cannot follow the bit clock through the synchronizer.
    ControlClockTooSlow { control_clock_hz: u32, required_hz: u64 },
    /// Source read latency is outside the supported range.
    UnsupportedLatency { latency: u32 },
    /// Source reads cannot complete within one word-select half period.
    FetchBudgetExceeded { latency: u32, budget: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidRatio {
                master_clock_hz,
                bit_clock_hz,
            } => write!(
                f,
                "master clock {master_clock_hz} Hz is not an integer multiple of 2 x {bit_clock_hz} Hz"
            ),
            Self::InvalidTableLength => write!(f, "sample table is empty"),
            Self::WidthMismatch { expected, found } => {
                write!(f, "serializer is {expected} bit but source is {found} bit")
            }
            Self::SampleOutOfRange { index, value, bits } => {
                write!(f, "sample {value} at frame {index} does not fit {bits} bit")
            }
            Self::ControlClockTooSlow {
                control_clock_hz,
                required_hz,
            } => write!(
                f,
                "control clock {control_clock_hz} Hz too slow, at least {required_hz} Hz needed"
            ),
            Self::UnsupportedLatency { latency } => {
                write!(f, "source latency of {latency} ticks is not supported")
            }
            Self::FetchBudgetExceeded { latency, budget } => write!(
                f,
                "source latency of {latency} ticks exceeds the fetch budget of {budget} ticks"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Design-time timing failure observed while the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingViolation {
    /// A synchronized level was held for less than two control ticks.
    GlitchWindow { line: Line },
    /// Word select changed without a coincident shift edge.
    UnalignedWordSelect,
    /// More bits than the word width were shifted in one half period.
    BitOverrun { channel: Channel },
    /// A half period ended before all bits were shifted.
    BitUnderrun { channel: Channel, bits: u32 },
    /// The serializer loaded while the staged frame was still being read.
    FetchLate,
    /// A read was requested while another one was in flight.
    ReadPortBusy,
}

impl fmt::Display for TimingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::GlitchWindow { line } => write!(f, "glitch window violated on {line:?}"),
            Self::UnalignedWordSelect => write!(f, "word select changed off a shift edge"),
            Self::BitOverrun { channel } => write!(f, "bit overrun on {channel:?} channel"),
            Self::BitUnderrun { channel, bits } => {
                write!(f, "only {bits} bits shifted on {channel:?} channel")
            }
            Self::FetchLate => write!(f, "staged frame not ready at load"),
            Self::ReadPortBusy => write!(f, "read port busy"),
        }
    }
}
