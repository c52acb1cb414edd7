use std::sync::Mutex;

/// Pass/fail tally accumulated over one pass of the fixture table.
pub struct RunTally {
    inner: Mutex<Tally>,
}

struct Tally {
    passed: usize,
    failed: usize,
}

impl RunTally {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Tally {
                passed: 0,
                failed: 0,
            }),
        }
    }

    pub fn record_pass(&self) {
        if let Ok(mut tally) = self.inner.lock() {
            tally.passed += 1;
        }
    }

    pub fn record_fail(&self) {
        if let Ok(mut tally) = self.inner.lock() {
            tally.failed += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(tally) = self.inner.lock() {
            (tally.passed, tally.failed)
        } else {
            (0, 0)
        }
    }

    pub fn all_passed(&self) -> bool {
        let (_, failed) = self.snapshot();
        failed == 0
    }
}

impl Default for RunTally {
    fn default() -> Self {
        Self::new()
    }
}
