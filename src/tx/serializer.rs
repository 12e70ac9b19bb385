//! Bit serializer.
//!
//! Words leave MSB first, one bit per shift edge. The MSB of a channel goes
//! out on the shift edge that coincides with the word-select transition. On
//! that same tick the register of the now idle channel is reloaded from the
//! staged frame, so the active register is never overwritten while it shifts.
//! Entering the left channel completes a frame and raises the one-tick
//! data-consumed pulse.

use crate::clock::EdgeState;
use crate::config::{Channel, SampleWidth, ShiftEdge, WordSelectPolarity};
use crate::error::TimingViolation;
use crate::source::Frame;
use crate::verify::Verifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransmissionState {
    /// Left shift register, sample in the upper bits.
    pub left: u32,
    /// Right shift register, sample in the upper bits.
    pub right: u32,
    /// Bits shifted out in the current half period.
    pub bit_index: u32,
    /// Channel being shifted.
    pub channel: Channel,
    /// Serial data line.
    pub data: bool,
    /// Frame boundary passed, the staged frame has been taken.
    pub consumed: bool,
}

impl TransmissionState {
    #[inline]
    fn register_mut(&mut self, channel: Channel) -> &mut u32 {
        match channel {
            Channel::Left => &mut self.left,
            Channel::Right => &mut self.right,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Serializer {
    state: TransmissionState,
    width: SampleWidth,
    shift_edge: ShiftEdge,
    polarity: WordSelectPolarity,

    // The half period right after reset starts without a transition.
    framed: bool,
}

impl Serializer {
    pub fn new(width: SampleWidth, shift_edge: ShiftEdge, polarity: WordSelectPolarity) -> Self {
        Self {
            state: TransmissionState::default(),
            width,
            shift_edge,
            polarity,
            framed: false,
        }
    }

    pub fn reset(&mut self) {
        self.state = TransmissionState::default();
        self.framed = false;
    }

    /// Advances one control tick.
    ///
    /// `staged` is the frame offered by the buffer controller, `None` while its
    /// read is still in flight.
    #[inline]
    pub fn tick(&mut self, edges: &EdgeState, staged: Option<Frame>, verifier: &mut Verifier) {
        let mut next = self.state;
        next.consumed = false;

        let shift = edges.bclk_edge(self.shift_edge);

        if edges.ws_edge() {
            if !shift {
                verifier.flag(TimingViolation::UnalignedWordSelect);
            }

            let bits = self.width.bits();
            if self.framed && next.bit_index != bits {
                verifier.flag(TimingViolation::BitUnderrun {
                    channel: next.channel,
                    bits: next.bit_index,
                });
            }
            self.framed = true;

            let entering = self.polarity.channel(edges.ws_rise);
            let idle = entering.opposite();
            next.channel = entering;
            next.bit_index = 0;

            match staged {
                Some(frame) => *next.register_mut(idle) = self.width.align(frame.channel(idle)),
                None => verifier.flag(TimingViolation::FetchLate),
            }

            if entering == Channel::Left {
                next.consumed = true;
            }
        }

        if shift {
            if next.bit_index >= self.width.bits() {
                verifier.flag(TimingViolation::BitOverrun {
                    channel: next.channel,
                });
            } else {
                let channel = next.channel;
                let register = next.register_mut(channel);
                let msb = *register & 0x8000_0000 != 0;
                *register <<= 1;
                next.data = msb;
                next.bit_index += 1;
            }
        }

        self.state = next;
    }

    #[inline]
    pub fn state(&self) -> TransmissionState {
        self.state
    }

    #[inline]
    pub fn data(&self) -> bool {
        self.state.data
    }

    #[inline]
    pub fn consumed(&self) -> bool {
        self.state.consumed
    }

    #[inline]
    pub fn width(&self) -> SampleWidth {
        self.width
    }
}
