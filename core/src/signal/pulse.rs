use crate::prelude::{SignalError, SignalResult, Waveform};
use serde::{Deserialize, Serialize};

/// Rectangular pulse-train generator.
///
/// Each cycle holds `dc + amplitude` for the first `duty_cycle` fraction of
/// its samples and `dc` for the remainder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseTrain {
    pub amplitude: f64,
    pub duty_cycle: f64,
    pub dc: f64,
    pub samples_per_cycle: usize,
    pub cycles: f64,
}

impl Default for PulseTrain {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            duty_cycle: 0.5,
            dc: 0.0,
            samples_per_cycle: 100,
            cycles: 1.0,
        }
    }
}

impl PulseTrain {
    fn validate(&self) -> SignalResult<()> {
        if self.samples_per_cycle == 0 {
            return Err(SignalError::InvalidWaveform(
                "samples_per_cycle must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.duty_cycle) {
            return Err(SignalError::InvalidWaveform(format!(
                "duty_cycle must lie in [0, 1], got {}",
                self.duty_cycle
            )));
        }
        if !self.cycles.is_finite() || self.cycles < 0.0 {
            return Err(SignalError::InvalidWaveform(format!(
                "cycles must be finite and non-negative, got {}",
                self.cycles
            )));
        }
        Ok(())
    }

    fn switch_point(&self) -> usize {
        (self.samples_per_cycle as f64 * self.duty_cycle) as usize
    }
}

impl Waveform for PulseTrain {
    fn sample_count(&self) -> usize {
        (self.samples_per_cycle as f64 * self.cycles) as usize
    }

    fn samples(&self) -> SignalResult<Vec<f64>> {
        self.validate()?;
        let switch_point = self.switch_point();
        Ok((0..self.sample_count())
            .map(|i| {
                if i % self.samples_per_cycle < switch_point {
                    self.dc + self.amplitude
                } else {
                    self.dc
                }
            })
            .collect())
    }
}
