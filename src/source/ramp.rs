//! Counting test pattern.
//!
//! Both words count up by one per frame, the right word in the opposite
//! direction, so a receiver can tell the channels apart and spot dropped or
//! repeated frames.

use super::{Frame, SampleSource};
use crate::config::SampleWidth;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampSource {
    width: SampleWidth,
    len: usize,
}

impl RampSource {
    pub fn new(width: SampleWidth, len: usize) -> Result<Self, ConfigError> {
        if len == 0 {
            return Err(ConfigError::InvalidTableLength);
        }

        let last = len - 1;
        if last > width.max_value() as usize {
            return Err(ConfigError::SampleOutOfRange {
                index: last,
                value: i32::try_from(last).unwrap_or(i32::MAX),
                bits: width.bits(),
            });
        }

        Ok(Self { width, len })
    }
}

impl SampleSource for RampSource {
    fn len(&self) -> usize {
        self.len
    }

    fn width(&self) -> SampleWidth {
        self.width
    }

    #[inline]
    fn read(&self, address: usize) -> Frame {
        let value = address as i32;
        Frame::new(value, -value)
    }
}
