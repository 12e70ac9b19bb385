//! Clock generation in the master domain and its crossing into the control domain.

pub mod divider;
pub mod synchronizer;

pub use divider::{ClockDivider, ClockState};
pub use synchronizer::{EdgeState, Synchronizer};
