//! Sample sources read by the buffer controller.

pub mod latched;
pub mod ramp;
pub mod table;

use dyn_clone::DynClone;

use crate::config::{Channel, SampleWidth};

/// One stereo instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub left: i32,
    pub right: i32,
}

impl Frame {
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn channel(&self, channel: Channel) -> i32 {
        match channel {
            Channel::Left => self.left,
            Channel::Right => self.right,
        }
    }
}

/// Read-only, single-port frame storage.
pub trait SampleSource: DynClone {
    /// Number of frames. Addresses are in `0..len()`.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn width(&self) -> SampleWidth;

    /// Frame at `address`, which is always below `len()`. Both samples must lie
    /// in the signed range of `width()`; `Engine::new` rejects a source that
    /// returns anything else.
    fn read(&self, address: usize) -> Frame;

    /// Control ticks between a read request and valid data.
    fn latency(&self) -> u32 {
        0
    }
}

dyn_clone::clone_trait_object!(SampleSource);
