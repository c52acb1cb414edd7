use anyhow::Context;
use rmscore::fixture::Fixture;
use rmscore::prelude::CaseOutcome;
use rmscore::telemetry::{RunLog, RunTally};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Aggregate verdict for one pass over the fixture table.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseReport>,
}

impl RunSummary {
    pub fn percent_failed(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.failed as f64 / self.total as f64
        }
    }
}

/// Per-case record kept for the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub index: usize,
    pub expected: String,
    pub output: String,
    pub correct: bool,
    pub exited_clean: bool,
    pub passed: bool,
}

pub struct Runner {
    candidate: PathBuf,
    log: RunLog,
    tally: RunTally,
}

impl Runner {
    pub fn new(candidate: PathBuf) -> Self {
        Self {
            candidate,
            log: RunLog::new(),
            tally: RunTally::new(),
        }
    }

    /// Runs every fixture in table order, printing one progress line per
    /// case. Mismatches are recorded and never abort the remaining cases.
    pub fn run(&self, fixtures: &[Fixture]) -> anyhow::Result<RunSummary> {
        let mut cases = Vec::with_capacity(fixtures.len());
        for (index, fixture) in fixtures.iter().enumerate() {
            print!("Running test {:3} ... ", index);
            io::stdout().flush().context("flushing progress line")?;

            let outcome = self.run_case(fixture)?;
            self.log.case(index, &outcome);

            if outcome.passed() {
                self.tally.record_pass();
                println!("ok");
            } else {
                self.tally.record_fail();
                println!(
                    "FAILED! Expected {}, got {}",
                    fixture.expected_text(),
                    outcome.raw_output.trim()
                );
            }

            cases.push(CaseReport {
                index,
                expected: fixture.expected_text(),
                output: outcome.raw_output.trim().to_string(),
                correct: outcome.correct,
                exited_clean: outcome.exited_clean,
                passed: outcome.passed(),
            });
        }

        let (passed, failed) = self.tally.snapshot();
        Ok(RunSummary {
            total: fixtures.len(),
            passed,
            failed,
            cases,
        })
    }

    /// Feeds one fixture to the candidate and collects its verdict. The
    /// child is fully reaped before the next case starts.
    fn run_case(&self, fixture: &Fixture) -> anyhow::Result<CaseOutcome> {
        let payload = fixture
            .stdin_payload()
            .context("materializing fixture samples")?;

        let mut child = Command::new(&self.candidate)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("launching candidate {}", self.candidate.display()))?;

        let mut stdin = child.stdin.take().context("candidate stdin unavailable")?;
        stdin
            .write_all(payload.as_bytes())
            .context("writing samples to candidate stdin")?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .context("collecting candidate output")?;

        let raw_output = String::from_utf8_lossy(&output.stdout).into_owned();
        Ok(CaseOutcome {
            correct: raw_output.trim() == fixture.expected_text(),
            exited_clean: output.status.success(),
            raw_output,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use rmscore::fixture::SignalSpec;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_candidate(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("candidate.sh");
        fs::write(&path, format!("#!/bin/sh\ncat > /dev/null\n{}\n", body)).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn unit_fixture() -> Fixture {
        Fixture::new(1.0, SignalSpec::Literal(vec![1.0]))
    }

    #[test]
    fn matching_output_and_clean_exit_passes() {
        let dir = TempDir::new().unwrap();
        let candidate = write_candidate(dir.path(), "echo 1.0");
        let summary = Runner::new(candidate).run(&[unit_fixture()]).unwrap();
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 0);
        assert!(summary.cases[0].passed);
    }

    #[test]
    fn wrong_output_is_recorded_not_fatal() {
        let dir = TempDir::new().unwrap();
        let candidate = write_candidate(dir.path(), "echo 9.9");
        let summary = Runner::new(candidate)
            .run(&[unit_fixture(), unit_fixture()])
            .unwrap();
        assert_eq!(summary.failed, 2);
        assert!(!summary.cases[0].correct);
        assert!(summary.cases[0].exited_clean);
        assert_eq!(summary.cases[0].output, "9.9");
    }

    #[test]
    fn nonzero_exit_fails_despite_matching_output() {
        let dir = TempDir::new().unwrap();
        let candidate = write_candidate(dir.path(), "echo 1.0\nexit 3");
        let summary = Runner::new(candidate).run(&[unit_fixture()]).unwrap();
        assert_eq!(summary.failed, 1);
        assert!(summary.cases[0].correct);
        assert!(!summary.cases[0].exited_clean);
    }

    #[test]
    fn missing_candidate_aborts_the_run() {
        let runner = Runner::new(PathBuf::from("/nonexistent/candidate"));
        assert!(runner.run(&[unit_fixture()]).is_err());
    }

    #[test]
    fn summary_percentage_reflects_failures() {
        let dir = TempDir::new().unwrap();
        let candidate = write_candidate(dir.path(), "echo 9.9");
        let summary = Runner::new(candidate)
            .run(&[unit_fixture(), unit_fixture(), unit_fixture(), unit_fixture()])
            .unwrap();
        assert_eq!(summary.percent_failed(), 100.0);
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let dir = TempDir::new().unwrap();
        let candidate = write_candidate(dir.path(), "echo 1.0");
        let first = Runner::new(candidate.clone())
            .run(&[unit_fixture()])
            .unwrap();
        let second = Runner::new(candidate).run(&[unit_fixture()]).unwrap();
        assert_eq!(first.passed, second.passed);
        assert_eq!(first.failed, second.failed);
    }
}
