//! Engine configuration and the clock ratios derived from it.

use crate::error::ConfigError;
use crate::verify::VerifyMode;
use crate::{
    CONTROL_CLOCK_HZ, MASTER_CLOCK_HZ, MAX_SOURCE_LATENCY, PIPELINE_DEPTH, SAMPLE_RATE_HZ,
};

/// Width of a sample word on the serial line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleWidth {
    #[default]
    Bits16,
    Bits24,
    Bits32,
}

impl SampleWidth {
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            16 => Some(Self::Bits16),
            24 => Some(Self::Bits24),
            32 => Some(Self::Bits32),
            _ => None,
        }
    }

    #[inline]
    pub fn bits(self) -> u32 {
        match self {
            Self::Bits16 => 16,
            Self::Bits24 => 24,
            Self::Bits32 => 32,
        }
    }

    #[inline]
    pub fn min_value(self) -> i32 {
        (-(1i64 << (self.bits() - 1))) as i32
    }

    #[inline]
    pub fn max_value(self) -> i32 {
        ((1i64 << (self.bits() - 1)) - 1) as i32
    }

    #[inline]
    pub fn contains(self, value: i32) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }

    /// Places a sample in the upper bits of a shift register word.
    #[inline]
    pub fn align(self, value: i32) -> u32 {
        (value as u32) << (32 - self.bits())
    }

    /// Sign-extends the lower `bits()` of a received word.
    #[inline]
    pub fn sign_extend(self, word: u32) -> i32 {
        let shift = 32 - self.bits();
        ((word << shift) as i32) >> shift
    }
}

/// Stereo channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Left,
    Right,
}

impl Channel {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Bit clock edge on which the data line changes.
///
/// Receivers sample on the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftEdge {
    #[default]
    Falling,
    Rising,
}

impl ShiftEdge {
    /// Bit clock level right after the shift edge.
    #[inline]
    pub fn level(self) -> bool {
        matches!(self, Self::Rising)
    }

    /// Bit clock level right after the capture edge.
    #[inline]
    pub fn capture_level(self) -> bool {
        !self.level()
    }
}

/// Mapping of the word-select level to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordSelectPolarity {
    /// Low selects the left channel.
    #[default]
    LeftLow,
    /// High selects the left channel.
    LeftHigh,
}

impl WordSelectPolarity {
    #[inline]
    pub fn channel(self, ws: bool) -> Channel {
        match (self, ws) {
            (Self::LeftLow, false) | (Self::LeftHigh, true) => Channel::Left,
            _ => Channel::Right,
        }
    }

    #[inline]
    pub fn level(self, channel: Channel) -> bool {
        match (self, channel) {
            (Self::LeftLow, Channel::Left) | (Self::LeftHigh, Channel::Right) => false,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Master clock in Hz, also passed through to the port.
    pub master_clock_hz: u32,

    /// Control domain clock in Hz.
    pub control_clock_hz: u32,

    /// Sample rate in Hz, equal to the word-select frequency.
    pub sample_rate_hz: u32,

    /// Bits per channel.
    pub width: SampleWidth,

    pub shift_edge: ShiftEdge,

    pub polarity: WordSelectPolarity,

    /// What happens when a timing violation is detected.
    pub verify: VerifyMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            master_clock_hz: MASTER_CLOCK_HZ,
            control_clock_hz: CONTROL_CLOCK_HZ,
            sample_rate_hz: SAMPLE_RATE_HZ,
            width: SampleWidth::Bits16,
            shift_edge: ShiftEdge::Falling,
            polarity: WordSelectPolarity::LeftLow,
            verify: VerifyMode::Record,
        }
    }
}

impl Config {
    /// Bit clock frequency in Hz.
    #[inline]
    pub fn bit_clock_hz(&self) -> u64 {
        self.sample_rate_hz as u64 * self.width.bits() as u64 * 2
    }

    /// Derives the divider thresholds and checks the clock relationships.
    pub fn timing(&self) -> Result<Timing, ConfigError> {
        let master = self.master_clock_hz as u64;
        let bit_clock_hz = self.bit_clock_hz();
        let toggle_rate = bit_clock_hz * 2;

        if bit_clock_hz == 0 || master < toggle_rate || master % toggle_rate != 0 {
            return Err(ConfigError::InvalidRatio {
                master_clock_hz: self.master_clock_hz,
                bit_clock_hz,
            });
        }

        let bclk_half_period = (master / toggle_rate) as u32;
        let ws_half_period = bclk_half_period * 2 * self.width.bits();

        // A new bit has to reach the data line before the next capture edge.
        let control = self.control_clock_hz as u64;
        if control * bclk_half_period as u64 <= PIPELINE_DEPTH as u64 * master {
            return Err(ConfigError::ControlClockTooSlow {
                control_clock_hz: self.control_clock_hz,
                required_hz: PIPELINE_DEPTH as u64 * master / bclk_half_period as u64 + 1,
            });
        }

        Ok(Timing {
            master_clock_hz: self.master_clock_hz,
            control_clock_hz: self.control_clock_hz,
            bit_clock_hz: bit_clock_hz as u32,
            word_select_hz: self.sample_rate_hz,
            bclk_half_period,
            ws_half_period,
        })
    }
}

/// Divider thresholds and nominal frequencies of a validated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub master_clock_hz: u32,
    pub control_clock_hz: u32,
    pub bit_clock_hz: u32,
    pub word_select_hz: u32,

    /// Master ticks per bit clock half period.
    pub bclk_half_period: u32,

    /// Master ticks per word-select half period.
    pub ws_half_period: u32,
}

impl Timing {
    /// Whole control ticks that fit into one word-select half period.
    pub fn control_ticks_per_half_frame(&self) -> u32 {
        (self.control_clock_hz as u64 * self.ws_half_period as u64
            / self.master_clock_hz as u64) as u32
    }

    /// Checks that a source with the given read latency keeps up with the serializer.
    ///
    /// The controller registers the consumed pulse one tick late and the read
    /// then takes `latency` ticks.
    pub fn check_latency(&self, latency: u32) -> Result<(), ConfigError> {
        if latency > MAX_SOURCE_LATENCY {
            return Err(ConfigError::UnsupportedLatency { latency });
        }

        let budget = self.control_ticks_per_half_frame();
        if 1 + latency >= budget {
            return Err(ConfigError::FetchBudgetExceeded { latency, budget });
        }

        Ok(())
    }
}
