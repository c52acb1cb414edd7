//! Fixture construction and signal synthesis for the RMS validation harness.
//!
//! Each fixture pairs a closed-form expected value with a synthetic input
//! signal; the driver binary feeds the signal to a candidate process over a
//! pipe and checks the RMS text it prints back.

pub mod fixture;
pub mod math;
pub mod prelude;
pub mod signal;
pub mod telemetry;

pub use prelude::{CaseOutcome, SignalError, SignalResult, Waveform};
