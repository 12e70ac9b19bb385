//! Reference receiver.
//!
//! Samples the data line on every capture edge of the bit clock, assigns the
//! bit to the channel selected by the word-select level, and closes a word
//! whenever the channel changes. Words are MSB first and sign-extended from the
//! configured width.

use alloc::vec::Vec;

use crate::config::{Channel, Config, SampleWidth, ShiftEdge, WordSelectPolarity};
use crate::source::Frame;
use crate::tx::TransmissionPort;

#[derive(Debug, Clone)]
pub struct Receiver {
    width: SampleWidth,
    shift_edge: ShiftEdge,
    polarity: WordSelectPolarity,

    last_bclk: bool,
    channel: Option<Channel>,
    word: u32,
    bits: u32,
    left: Option<i32>,

    frames: Vec<Frame>,
    half_periods: Vec<(Channel, u32)>,
}

impl Receiver {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.width,
            shift_edge: config.shift_edge,
            polarity: config.polarity,
            last_bclk: config.shift_edge.level(),
            channel: None,
            word: 0,
            bits: 0,
            left: None,
            frames: Vec::new(),
            half_periods: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        self.last_bclk = self.shift_edge.level();
        self.channel = None;
        self.word = 0;
        self.bits = 0;
        self.left = None;
        self.frames.clear();
        self.half_periods.clear();
    }

    /// Looks at the port after a master tick.
    #[inline]
    pub fn observe(&mut self, port: &TransmissionPort) {
        let capture = port.bclk != self.last_bclk && port.bclk == self.shift_edge.capture_level();
        self.last_bclk = port.bclk;

        if !capture {
            return;
        }

        let channel = self.polarity.channel(port.ws);
        if self.channel != Some(channel) {
            self.close_word();
            self.channel = Some(channel);
        }

        self.word = (self.word << 1) | port.sd as u32;
        self.bits += 1;
    }

    fn close_word(&mut self) {
        let Some(channel) = self.channel else {
            return;
        };

        self.half_periods.push((channel, self.bits));

        if self.bits == self.width.bits() {
            let value = self.width.sign_extend(self.word);
            match channel {
                Channel::Left => self.left = Some(value),
                Channel::Right => {
                    if let Some(left) = self.left.take() {
                        log::trace!("frame {}: {} {}", self.frames.len(), left, value);
                        self.frames.push(Frame::new(left, value));
                    }
                }
            }
        } else {
            self.left = None;
        }

        self.word = 0;
        self.bits = 0;
    }

    /// Completed frames, starting with the silent frame sent after reset.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Channel and bit count of every completed half period.
    #[inline]
    pub fn half_periods(&self) -> &[(Channel, u32)] {
        &self.half_periods
    }
}
