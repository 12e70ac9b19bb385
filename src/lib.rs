#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod resources;
pub mod sim;
pub mod source;
pub mod tx;
pub mod verify;

pub use config::{Channel, Config, SampleWidth, ShiftEdge, Timing, WordSelectPolarity};
pub use engine::Engine;
pub use error::{ConfigError, TimingViolation};
pub use source::{Frame, SampleSource};
pub use source::table::SampleTable;
pub use verify::VerifyMode;

/// Master clock frequency of the reference design in Hz.
pub const MASTER_CLOCK_HZ: u32 = 12_288_000;

/// Control domain clock frequency of the reference design in Hz.
pub const CONTROL_CLOCK_HZ: u32 = 100_000_000;

/// Audio sample rate of the reference design in Hz.
pub const SAMPLE_RATE_HZ: u32 = 48_000;

/// Control ticks between a shift edge on the bit clock and the new bit on the data line.
///
/// Two synchronizer stages, the registered edge pulse and the data register.
pub const PIPELINE_DEPTH: u32 = 4;

/// Highest read latency of a sample source in control ticks.
pub const MAX_SOURCE_LATENCY: u32 = 1;
