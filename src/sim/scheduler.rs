//! Two-domain scheduler.
//!
//! Time is an integer count of `1 / lcm(master, control)` seconds, so both
//! clocks keep their exact ratio over any run length. When edges of both
//! domains fall on the same instant the control domain samples first and sees
//! the levels from before the master edge.

use crate::engine::Engine;
use crate::sim::receiver::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Master,
    Control,
}

#[derive(Clone)]
pub struct Simulator {
    engine: Engine,
    receiver: Receiver,
    master_period: u64,
    control_period: u64,
    next_master: u64,
    next_control: u64,
}

impl Simulator {
    pub fn new(engine: Engine) -> Self {
        let master_hz = engine.timing().master_clock_hz as u64;
        let control_hz = engine.timing().control_clock_hz as u64;
        let g = gcd(master_hz, control_hz);
        let receiver = Receiver::new(engine.config());

        Self {
            engine,
            receiver,
            master_period: control_hz / g,
            control_period: master_hz / g,
            next_master: control_hz / g,
            next_control: master_hz / g,
        }
    }

    /// Advances whichever domain has the next edge.
    #[inline]
    pub fn step(&mut self) -> Domain {
        if self.next_control <= self.next_master {
            self.engine.control_tick();
            self.next_control += self.control_period;
            Domain::Control
        } else {
            self.engine.master_tick();
            self.receiver.observe(&self.engine.port());
            self.next_master += self.master_period;
            Domain::Master
        }
    }

    /// Runs until `ticks` more master ticks have passed.
    pub fn run_master_ticks(&mut self, ticks: u64) {
        let target = self.engine.master_ticks() + ticks;
        while self.engine.master_ticks() < target {
            self.step();
        }
    }

    /// Runs until `ticks` more control ticks have passed.
    pub fn run_control_ticks(&mut self, ticks: u64) {
        let target = self.engine.control_ticks() + ticks;
        while self.engine.control_ticks() < target {
            self.step();
        }
    }

    /// Runs for the duration of `frames` word-select periods.
    pub fn run_frames(&mut self, frames: u64) {
        self.run_master_ticks(frames * 2 * self.engine.timing().ws_half_period as u64);
    }

    /// Resets the engine and starts a fresh capture. Time keeps running.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.receiver.reset();
    }

    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    #[inline]
    pub fn receiver(&self) -> &Receiver {
        &self.receiver
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
