use crate::prelude::{SignalError, SignalResult, Waveform};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Closed-form sinusoid generator.
///
/// Sample `i` is `dc + amplitude * sin(i * 2π/samples_per_cycle + phase)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Sinusoid {
    pub amplitude: f64,
    pub phase: f64,
    pub dc: f64,
    pub samples_per_cycle: usize,
    pub cycles: f64,
}

impl Default for Sinusoid {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            phase: 0.0,
            dc: 0.0,
            samples_per_cycle: 128,
            cycles: 1.0,
        }
    }
}

impl Sinusoid {
    fn validate(&self) -> SignalResult<()> {
        if self.samples_per_cycle == 0 {
            return Err(SignalError::InvalidWaveform(
                "samples_per_cycle must be positive".into(),
            ));
        }
        if !self.cycles.is_finite() || self.cycles < 0.0 {
            return Err(SignalError::InvalidWaveform(format!(
                "cycles must be finite and non-negative, got {}",
                self.cycles
            )));
        }
        Ok(())
    }
}

impl Waveform for Sinusoid {
    fn sample_count(&self) -> usize {
        (self.samples_per_cycle as f64 * self.cycles) as usize
    }

    fn samples(&self) -> SignalResult<Vec<f64>> {
        self.validate()?;
        let dtheta = 2.0 * PI / self.samples_per_cycle as f64;
        Ok((0..self.sample_count())
            .map(|i| self.dc + self.amplitude * (i as f64 * dtheta + self.phase).sin())
            .collect())
    }
}
