//! Sample buffer controller.
//!
//! Keeps the frame at the current address staged for the serializer. A
//! data-consumed pulse advances the address and requests the next frame. The
//! request goes out one word-select half period before the left word of that
//! frame is loaded, which covers a source latency of up to one tick.

use alloc::boxed::Box;

use crate::error::TimingViolation;
use crate::source::{Frame, SampleSource};
use crate::verify::Verifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    address: usize,
    remaining: u32,
}

#[derive(Clone)]
pub struct BufferController {
    source: Box<dyn SampleSource>,
    address: usize,
    holding: Frame,
    pending: Option<Pending>,
}

impl BufferController {
    /// Takes a non-empty source and requests its first frame.
    pub fn new(source: Box<dyn SampleSource>) -> Self {
        let mut controller = Self {
            source,
            address: 0,
            holding: Frame::default(),
            pending: None,
        };
        controller.request(0);

        controller
    }

    pub fn reset(&mut self) {
        self.address = 0;
        self.holding = Frame::default();
        self.pending = None;
        self.request(0);
    }

    /// Advances one control tick. `consumed` is the serializer's pulse from the
    /// previous tick.
    #[inline]
    pub fn tick(&mut self, consumed: bool, verifier: &mut Verifier) {
        if let Some(pending) = self.pending.as_mut() {
            pending.remaining -= 1;
            if pending.remaining == 0 {
                self.holding = self.source.read(pending.address);
                self.pending = None;
            }
        }

        if consumed {
            if self.pending.is_some() {
                verifier.flag(TimingViolation::ReadPortBusy);
                return;
            }

            self.address += 1;
            if self.address >= self.source.len() {
                self.address = 0;
            }
            self.request(self.address);
        }
    }

    fn request(&mut self, address: usize) {
        match self.source.latency() {
            0 => self.holding = self.source.read(address),
            remaining => self.pending = Some(Pending { address, remaining }),
        }
    }

    /// Frame at the current address, `None` while it is being read.
    #[inline]
    pub fn staged(&self) -> Option<Frame> {
        match self.pending {
            Some(_) => None,
            None => Some(self.holding),
        }
    }

    #[inline]
    pub fn address(&self) -> usize {
        self.address
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn source(&self) -> &dyn SampleSource {
        self.source.as_ref()
    }
}
