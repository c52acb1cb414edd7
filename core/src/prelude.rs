/// Common error type for waveform materialization.
#[derive(thiserror::Error, Debug)]
pub enum SignalError {
    #[error("invalid waveform: {0}")]
    InvalidWaveform(String),
}

pub type SignalResult<T> = Result<T, SignalError>;

/// Trait describing closed-form generators of finite sample sequences.
pub trait Waveform {
    /// Number of samples the generator will emit.
    fn sample_count(&self) -> usize;
    /// Materializes the full sample sequence in order.
    fn samples(&self) -> SignalResult<Vec<f64>>;
}

/// Result of exercising the candidate against a single fixture.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub correct: bool,
    pub exited_clean: bool,
    pub raw_output: String,
}

impl CaseOutcome {
    /// A case passes only when the output matched and the exit was clean.
    pub fn passed(&self) -> bool {
        self.correct && self.exited_clean
    }
}
