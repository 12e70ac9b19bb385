//! Timing verification hooks.
//!
//! Violations are never recovered at runtime. Depending on the mode they are
//! ignored, recorded for inspection by a test, or turned into a panic.

use crate::error::TimingViolation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerifyMode {
    Off,
    #[default]
    Record,
    Assert,
}

/// Violation with the control tick it was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    pub tick: u64,
    pub violation: TimingViolation,
}

#[derive(Debug, Clone, Default)]
pub struct Verifier {
    mode: VerifyMode,
    tick: u64,
    first: Option<Fault>,
    last: Option<Fault>,
    count: u32,
}

impl Verifier {
    pub fn new(mode: VerifyMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    #[inline]
    pub fn mode(&self) -> VerifyMode {
        self.mode
    }

    /// Moves to the next control tick.
    #[inline]
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    #[inline]
    pub fn flag(&mut self, violation: TimingViolation) {
        match self.mode {
            VerifyMode::Off => {}
            VerifyMode::Record => {
                log::warn!("control tick {}: {}", self.tick, violation);
                let fault = Fault {
                    tick: self.tick,
                    violation,
                };
                self.first.get_or_insert(fault);
                self.last = Some(fault);
                self.count = self.count.saturating_add(1);
            }
            VerifyMode::Assert => {
                panic!("control tick {}: {}", self.tick, violation);
            }
        }
    }

    /// True if nothing was recorded.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn first(&self) -> Option<Fault> {
        self.first
    }

    #[inline]
    pub fn last(&self) -> Option<Fault> {
        self.last
    }

    /// Forgets recorded faults. Engine resets keep them.
    pub fn clear(&mut self) {
        self.first = None;
        self.last = None;
        self.count = 0;
    }
}
