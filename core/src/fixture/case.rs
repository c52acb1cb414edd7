use crate::prelude::{SignalResult, Waveform};
use crate::signal::{PulseTrain, Sinusoid};
use serde::{Deserialize, Serialize};

/// Finite ordered sample sequence in either literal or generated form.
///
/// Literal lists and lazily specified waveforms normalize through
/// [`SignalSpec::materialize`] before being formatted as candidate input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSpec {
    Literal(Vec<f64>),
    Sinusoid(Sinusoid),
    PulseTrain(PulseTrain),
}

impl SignalSpec {
    pub fn materialize(&self) -> SignalResult<Vec<f64>> {
        match self {
            SignalSpec::Literal(values) => Ok(values.clone()),
            SignalSpec::Sinusoid(wave) => wave.samples(),
            SignalSpec::PulseTrain(wave) => wave.samples(),
        }
    }
}

/// One test vector: the closed-form expected RMS and the signal fed to the
/// candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub expected: f64,
    pub signal: SignalSpec,
}

impl Fixture {
    pub fn new(expected: f64, signal: SignalSpec) -> Self {
        Self { expected, signal }
    }

    /// Exact text the candidate must print: the shortest round-trip form of
    /// the expected value, fractional part always present.
    pub fn expected_text(&self) -> String {
        format!("{:?}", self.expected)
    }

    /// Space-joined samples written to the candidate's standard input.
    pub fn stdin_payload(&self) -> SignalResult<String> {
        let samples = self.signal.materialize()?;
        let rendered: Vec<String> = samples.iter().map(|v| format!("{:?}", v)).collect();
        Ok(rendered.join(" "))
    }
}
