//! Shared setup for the integration tests.

use std::sync::Once;

use i2s_tx::sim::Simulator;
use i2s_tx::{Config, Engine, SampleSource};
use simple_logger::SimpleLogger;

static LOGGER: Once = Once::new();

/// Routes the crate's log output to the console once per test binary.
pub fn init_logger() {
    LOGGER.call_once(|| {
        SimpleLogger::new()
            .with_level(log::LevelFilter::Info)
            .init()
            .ok();
    });
}

pub fn engine<S: SampleSource + 'static>(config: Config, source: S) -> Engine {
    init_logger();
    Engine::new(config, Box::new(source)).unwrap()
}

pub fn simulator<S: SampleSource + 'static>(config: Config, source: S) -> Simulator {
    Simulator::new(engine(config, source))
}
