//! Driver for the two clock domains and a reference receiver.

pub mod receiver;
pub mod scheduler;

pub use receiver::Receiver;
pub use scheduler::{Domain, Simulator};
