//! The transmission engine.
//!
//! All state lives in one context object with a step function per clock
//! domain. `master_tick` advances the divider at the master clock rate,
//! `control_tick` advances everything else at the control clock rate. The two
//! are driven independently; the synchronizer is the only path from the master
//! domain into the control domain.

use alloc::boxed::Box;

use crate::clock::{ClockDivider, ClockState, EdgeState, Synchronizer};
use crate::config::{Channel, Config, Timing};
use crate::error::ConfigError;
use crate::source::SampleSource;
use crate::tx::{BufferController, PortTiming, Serializer, TransmissionPort, TransmissionState};
use crate::verify::Verifier;

#[derive(Clone)]
pub struct Engine {
    config: Config,
    timing: Timing,

    // Master domain.
    divider: ClockDivider,
    master_ticks: u64,

    // Control domain.
    synchronizer: Synchronizer,
    serializer: Serializer,
    buffer: BufferController,
    verifier: Verifier,
    control_ticks: u64,
}

impl Engine {
    /// Validates the configuration against the source and builds the engine in
    /// its reset state.
    pub fn new(config: Config, source: Box<dyn SampleSource>) -> Result<Self, ConfigError> {
        let timing = config.timing()?;

        if source.is_empty() {
            return Err(ConfigError::InvalidTableLength);
        }

        if source.width() != config.width {
            return Err(ConfigError::WidthMismatch {
                expected: config.width.bits(),
                found: source.width().bits(),
            });
        }

        for index in 0..source.len() {
            let frame = source.read(index);
            for value in [frame.left, frame.right] {
                if !config.width.contains(value) {
                    return Err(ConfigError::SampleOutOfRange {
                        index,
                        value,
                        bits: config.width.bits(),
                    });
                }
            }
        }

        timing.check_latency(source.latency())?;

        log::debug!(
            "engine: mclk {} Hz, bclk {} Hz ({} ticks/half), ws {} Hz ({} ticks/half), {} frames, latency {}",
            timing.master_clock_hz,
            timing.bit_clock_hz,
            timing.bclk_half_period,
            timing.word_select_hz,
            timing.ws_half_period,
            source.len(),
            source.latency(),
        );

        let bclk = config.shift_edge.level();
        let ws = config.polarity.level(Channel::Left);

        Ok(Self {
            config,
            timing,
            divider: ClockDivider::new(&timing, bclk, ws),
            master_ticks: 0,
            synchronizer: Synchronizer::new(bclk, ws),
            serializer: Serializer::new(config.width, config.shift_edge, config.polarity),
            buffer: BufferController::new(source),
            verifier: Verifier::new(config.verify),
            control_ticks: 0,
        })
    }

    /// One master clock cycle.
    #[inline]
    pub fn master_tick(&mut self) {
        self.divider.tick();
        self.master_ticks += 1;
    }

    /// One control clock cycle.
    ///
    /// Every component sees the state as it was at the start of the tick.
    #[inline]
    pub fn control_tick(&mut self) {
        self.verifier.advance();

        let edges = self.synchronizer.state();
        let staged = self.buffer.staged();
        let consumed = self.serializer.consumed();

        self.serializer.tick(&edges, staged, &mut self.verifier);
        self.buffer.tick(consumed, &mut self.verifier);
        self.synchronizer
            .tick(self.divider.bclk(), self.divider.ws(), &mut self.verifier);

        self.control_ticks += 1;
    }

    /// Returns counters, levels, registers and the address to their initial
    /// values in both domains. Recorded faults and tick counts are kept.
    pub fn reset(&mut self) {
        log::debug!(
            "engine reset at master tick {}, control tick {}",
            self.master_ticks,
            self.control_ticks
        );

        self.divider.reset();
        self.synchronizer.reset();
        self.serializer.reset();
        self.buffer.reset();
    }

    /// Output lines as they are right now.
    #[inline]
    pub fn port(&self) -> TransmissionPort {
        TransmissionPort {
            mclk_cycles: self.master_ticks,
            bclk: self.divider.bclk(),
            ws: self.divider.ws(),
            sd: self.serializer.data(),
        }
    }

    pub fn port_timing(&self) -> PortTiming {
        PortTiming::new(&self.timing)
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    #[inline]
    pub fn clock_state(&self) -> ClockState {
        self.divider.state()
    }

    #[inline]
    pub fn initial_clock_state(&self) -> ClockState {
        self.divider.reset_state()
    }

    #[inline]
    pub fn edge_state(&self) -> EdgeState {
        self.synchronizer.state()
    }

    #[inline]
    pub fn initial_edge_state(&self) -> EdgeState {
        self.synchronizer.reset_state()
    }

    #[inline]
    pub fn transmission_state(&self) -> TransmissionState {
        self.serializer.state()
    }

    #[inline]
    pub fn address(&self) -> usize {
        self.buffer.address()
    }

    #[inline]
    pub fn buffer(&self) -> &BufferController {
        &self.buffer
    }

    #[inline]
    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    #[inline]
    pub fn verifier_mut(&mut self) -> &mut Verifier {
        &mut self.verifier
    }

    #[inline]
    pub fn master_ticks(&self) -> u64 {
        self.master_ticks
    }

    #[inline]
    pub fn control_ticks(&self) -> u64 {
        self.control_ticks
    }
}
