use crate::prelude::CaseOutcome;
use log::{debug, info};

/// Diagnostic log channel for per-case verdicts.
pub struct RunLog;

impl RunLog {
    pub fn new() -> Self {
        Self
    }

    pub fn case(&self, index: usize, outcome: &CaseOutcome) {
        info!(
            "case {} correct={} exited_clean={}",
            index, outcome.correct, outcome.exited_clean
        );
        debug!("case {} raw output {:?}", index, outcome.raw_output);
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}
