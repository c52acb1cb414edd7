use std::f64::consts::SQRT_2;

/// Numeric RMS plus the closed-form identities behind each expected value.
pub struct RmsMath;

impl RmsMath {
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// RMS of a DC-offset sinusoid over complete cycles:
    /// `sqrt(dc² + (amplitude/√2)²)`.
    pub fn sinusoid_rms(amplitude: f64, dc: f64) -> f64 {
        (dc * dc + (amplitude / SQRT_2).powi(2)).sqrt()
    }

    /// RMS of a zero-baseline rectangular pulse: `amplitude * sqrt(duty_cycle)`.
    pub fn pulse_rms(amplitude: f64, duty_cycle: f64) -> f64 {
        amplitude * duty_cycle.sqrt()
    }
}
