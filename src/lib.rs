//! Retrying controller for a single physical gate.
//!
//! [`GateActuator`] drives a [`GateController`], retries failed actions up to
//! [`MAX_ATTEMPTS`] times and reports every attempt to a [`MessageSink`].

pub mod app;
pub mod config;
pub mod error;
pub mod hal;
pub mod svc;

pub use app::action::Action;
pub use app::gate_actuator::{GateActuator, GateStats, MAX_ATTEMPTS};
pub use error::{GateError, GateResult};
pub use hal::gate::{GateController, GateState};
pub use svc::{FifoLog, LogEntry, MessageSink};
