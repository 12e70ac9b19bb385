//! Transmit path: frame staging, serialization and the output port.

pub mod buffer;
pub mod port;
pub mod serializer;

pub use buffer::BufferController;
pub use port::{Line, PortTiming, TransmissionPort};
pub use serializer::{Serializer, TransmissionState};
