use crate::arith::add;
use serde::{Deserialize, Serialize};

/// One fixed assertion: `add(a, b) == expected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdditionCase {
    pub name: String,
    pub a: i32,
    pub b: i32,
    pub expected: i32,
    /// The expected value is intentionally wrong. Such a case is supposed to disagree with `add`.
    #[serde(default)]
    pub known_bad: bool,
}

impl AdditionCase {
    pub fn new(name: impl Into<String>, a: i32, b: i32, expected: i32) -> Self {
        Self {
            name: name.into(),
            a,
            b,
            expected,
            known_bad: false,
        }
    }

    pub fn known_bad(mut self) -> Self {
        self.known_bad = true;
        self
    }
}

impl std::fmt::Display for AdditionCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: add({}, {}) == {}",
            self.name, self.a, self.b, self.expected
        )?;
        if self.known_bad {
            write!(f, " [known bad]")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Passed,
    Failed { actual: i32 },
    /// A known-bad fixture disagreed with `add`, as it should.
    KnownBad { actual: i32 },
    /// A known-bad fixture agreed with `add`: the fixture or `add` changed.
    UnexpectedPass,
}

impl std::fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "ok"),
            Self::Failed { actual } => write!(f, "FAILED (got {actual})"),
            Self::KnownBad { actual } => write!(f, "known bad (got {actual})"),
            Self::UnexpectedPass => write!(f, "UNEXPECTED PASS"),
        }
    }
}

/// The five cases of the original suite, in order.
///
/// `add_failure_example` asserts `add(2, 2) == 10` on purpose; it is kept as a
/// known-bad fixture rather than corrected.
pub fn builtin_cases() -> Vec<AdditionCase> {
    vec![
        AdditionCase::new("add_positive_numbers", 2, 3, 5),
        AdditionCase::new("add_negative_numbers", -2, -3, -5),
        AdditionCase::new("add_zero", 0, 0, 0),
        AdditionCase::new("add_positive_and_negative", 3, -2, 1),
        AdditionCase::new("add_failure_example", 2, 2, 10).known_bad(),
    ]
}

pub fn run_case(case: &AdditionCase) -> CaseOutcome {
    let actual = add(case.a, case.b);
    match (actual == case.expected, case.known_bad) {
        (true, false) => CaseOutcome::Passed,
        (false, false) => CaseOutcome::Failed { actual },
        (false, true) => CaseOutcome::KnownBad { actual },
        (true, true) => CaseOutcome::UnexpectedPass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_cases_match_source_suite() {
        let cases = builtin_cases();
        assert_eq!(cases.len(), 5);
        assert_eq!(
            cases.iter().filter(|c| c.known_bad).count(),
            1,
            "only the failure example is known bad"
        );
        let failure = cases.last().unwrap();
        assert_eq!(failure.name, "add_failure_example");
        assert_eq!((failure.a, failure.b, failure.expected), (2, 2, 10));
    }

    #[test]
    fn correct_builtin_cases_pass() {
        for case in builtin_cases().iter().filter(|c| !c.known_bad) {
            assert_eq!(run_case(case), CaseOutcome::Passed, "{case}");
        }
    }

    #[test]
    fn failure_example_is_known_bad_with_true_sum() {
        let case = AdditionCase::new("add_failure_example", 2, 2, 10).known_bad();
        assert_eq!(run_case(&case), CaseOutcome::KnownBad { actual: 4 });
    }

    #[test]
    fn wrong_expectation_fails() {
        let case = AdditionCase::new("off_by_one", 2, 3, 6);
        assert_eq!(run_case(&case), CaseOutcome::Failed { actual: 5 });
    }

    #[test]
    fn known_bad_that_agrees_is_flagged() {
        let case = AdditionCase::new("stale", 2, 2, 4).known_bad();
        assert_eq!(run_case(&case), CaseOutcome::UnexpectedPass);
    }

    #[test]
    fn display_marks_known_bad() {
        let case = AdditionCase::new("x", 1, 1, 3).known_bad();
        assert_eq!(case.to_string(), "x: add(1, 1) == 3 [known bad]");
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_string(&CaseOutcome::KnownBad { actual: 4 }).unwrap();
        assert_eq!(json, r#"{"status":"known_bad","actual":4}"#);
    }
}
