use crate::cases::{AdditionCase, CaseOutcome, run_case};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub case: AdditionCase,
    pub outcome: CaseOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub reports: Vec<CaseReport>,
    pub passed: usize,
    pub failed: usize,
    pub known_bad: usize,
    pub unexpected_passes: usize,
}

impl RunSummary {
    fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            reports: Vec::new(),
            passed: 0,
            failed: 0,
            known_bad: 0,
            unexpected_passes: 0,
        }
    }

    fn record(&mut self, case: &AdditionCase, outcome: CaseOutcome) {
        match outcome {
            CaseOutcome::Passed => self.passed += 1,
            CaseOutcome::Failed { .. } => self.failed += 1,
            CaseOutcome::KnownBad { .. } => self.known_bad += 1,
            CaseOutcome::UnexpectedPass => self.unexpected_passes += 1,
        }
        self.reports.push(CaseReport {
            case: case.clone(),
            outcome,
        });
    }

    pub fn total(&self) -> usize {
        self.reports.len()
    }

    /// Known-bad fixtures only count against the run in strict mode.
    pub fn is_success(&self, strict: bool) -> bool {
        self.failed == 0 && self.unexpected_passes == 0 && (!strict || self.known_bad == 0)
    }
}

pub fn run_cases(cases: &[AdditionCase]) -> RunSummary {
    let mut summary = RunSummary::new();
    for case in cases {
        let outcome = run_case(case);
        match outcome {
            CaseOutcome::Passed => debug!(case = %case.name, "passed"),
            CaseOutcome::KnownBad { actual } => {
                debug!(case = %case.name, actual, expected = case.expected, "known-bad fixture")
            }
            CaseOutcome::Failed { actual } => {
                warn!(case = %case.name, actual, expected = case.expected, "case failed")
            }
            CaseOutcome::UnexpectedPass => {
                warn!(case = %case.name, "known-bad fixture unexpectedly passed")
            }
        }
        summary.record(case, outcome);
    }
    info!(
        total = summary.total(),
        passed = summary.passed,
        failed = summary.failed,
        known_bad = summary.known_bad,
        unexpected_passes = summary.unexpected_passes,
        "run complete"
    );
    summary
}
