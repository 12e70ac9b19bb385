//! Registered read port adding one tick of latency, like a block RAM with an
//! output register.

use super::{Frame, SampleSource};
use crate::config::SampleWidth;

#[derive(Debug, Clone)]
pub struct Latched<S> {
    inner: S,
}

impl<S: SampleSource + Clone> Latched<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: SampleSource + Clone> SampleSource for Latched<S> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn width(&self) -> SampleWidth {
        self.inner.width()
    }

    #[inline]
    fn read(&self, address: usize) -> Frame {
        self.inner.read(address)
    }

    fn latency(&self) -> u32 {
        self.inner.latency() + 1
    }
}
