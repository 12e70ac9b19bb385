//! Fixed table of precomputed frames.

use alloc::vec::Vec;

use super::{Frame, SampleSource};
use crate::config::SampleWidth;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTable {
    width: SampleWidth,
    frames: Vec<Frame>,
}

impl SampleTable {
    /// Builds a table, rejecting empty tables and samples outside `width`.
    pub fn new(width: SampleWidth, frames: Vec<Frame>) -> Result<Self, ConfigError> {
        if frames.is_empty() {
            return Err(ConfigError::InvalidTableLength);
        }

        for (index, frame) in frames.iter().enumerate() {
            for value in [frame.left, frame.right] {
                if !width.contains(value) {
                    return Err(ConfigError::SampleOutOfRange {
                        index,
                        value,
                        bits: width.bits(),
                    });
                }
            }
        }

        Ok(Self { width, frames })
    }

    /// Same sample on both channels.
    pub fn from_mono(width: SampleWidth, samples: &[i32]) -> Result<Self, ConfigError> {
        Self::new(width, samples.iter().map(|&s| Frame::new(s, s)).collect())
    }

    /// Caller guarantees a non-empty table with samples inside `width`.
    pub(crate) fn new_unchecked(width: SampleWidth, frames: Vec<Frame>) -> Self {
        debug_assert!(!frames.is_empty());
        Self { width, frames }
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Frame> {
        self.frames.get(index).copied()
    }
}

impl SampleSource for SampleTable {
    fn len(&self) -> usize {
        self.frames.len()
    }

    fn width(&self) -> SampleWidth {
        self.width
    }

    #[inline]
    fn read(&self, address: usize) -> Frame {
        self.frames[address]
    }
}
