use chrono::{DateTime, Duration, Utc};

use crate::config::constants::{
    VERIFICATION_FIRST_RUN_FAILED_PASSES, VERIFICATION_FIRST_RUN_THRESHOLD,
    VERIFICATION_SECOND_RUN_FAILED_PASSES, VERIFICATION_SECOND_RUN_THRESHOLD,
    VERIFICATION_TESTS_RUN,
};
use crate::enums::run_status::RunStatus;
use crate::structs::verification_run::VerificationRun;

/// Canned three-iteration CI progression keyed only off the defect count.
pub struct VerificationSimulator;

impl VerificationSimulator {
    pub fn simulate(bugs_detected: usize, now: DateTime<Utc>) -> Vec<VerificationRun> {
        let first_failed = bugs_detected > VERIFICATION_FIRST_RUN_THRESHOLD;
        let second_failed = bugs_detected > VERIFICATION_SECOND_RUN_THRESHOLD;

        vec![
            VerificationRun {
                id: 1,
                iteration: 1,
                status: Self::status(first_failed),
                timestamp: now - Duration::minutes(6),
                duration: "1m 12s".to_string(),
                tests_run: VERIFICATION_TESTS_RUN,
                tests_passed: if first_failed { VERIFICATION_FIRST_RUN_FAILED_PASSES } else { VERIFICATION_TESTS_RUN },
                checks: vec![
                    "✓ ESLint validation passed".to_string(),
                    "✓ TypeScript compilation successful".to_string(),
                    if first_failed { "✗ Some unit tests failed" } else { "✓ Unit tests passed (32/32)" }.to_string(),
                    "✓ Integration tests passed (15/15)".to_string(),
                    "✓ Build process completed".to_string(),
                ],
            },
            VerificationRun {
                id: 2,
                iteration: 2,
                status: Self::status(second_failed),
                timestamp: now - Duration::minutes(3),
                duration: "1m 05s".to_string(),
                tests_run: VERIFICATION_TESTS_RUN,
                tests_passed: if second_failed { VERIFICATION_SECOND_RUN_FAILED_PASSES } else { VERIFICATION_TESTS_RUN },
                checks: vec![
                    "✓ Code formatting verified".to_string(),
                    "✓ Type safety checks passed".to_string(),
                    "✓ All imports resolved correctly".to_string(),
                    if second_failed { "✗ Some tests still failing" } else { "✓ Unit tests passed (32/32)" }.to_string(),
                    "✓ Integration tests passed (15/15)".to_string(),
                ],
            },
            VerificationRun {
                id: 3,
                iteration: 3,
                status: RunStatus::Passed,
                timestamp: now - Duration::minutes(1),
                duration: "0m 58s".to_string(),
                tests_run: VERIFICATION_TESTS_RUN,
                tests_passed: VERIFICATION_TESTS_RUN,
                checks: vec![
                    "✓ Final validation complete".to_string(),
                    "✓ All linting rules satisfied".to_string(),
                    "✓ Zero type errors".to_string(),
                    "✓ Unit tests passed (32/32)".to_string(),
                    "✓ Integration tests passed (15/15)".to_string(),
                    "✓ Ready for deployment".to_string(),
                ],
            },
        ]
    }

    fn status(failed: bool) -> RunStatus {
        if failed { RunStatus::Failed } else { RunStatus::Passed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(runs: &[VerificationRun]) -> Vec<(RunStatus, u32)> {
        runs.iter().map(|r| (r.status, r.tests_passed)).collect()
    }

    #[test]
    fn twelve_bugs_fail_first_two_runs() {
        let runs = VerificationSimulator::simulate(12, Utc::now());
        assert_eq!(summary(&runs), vec![
            (RunStatus::Failed, 35),
            (RunStatus::Failed, 42),
            (RunStatus::Passed, 47),
        ]);
    }

    #[test]
    fn thresholds_are_strictly_greater_than() {
        assert_eq!(summary(&VerificationSimulator::simulate(10, Utc::now())), vec![
            (RunStatus::Passed, 47),
            (RunStatus::Failed, 42),
            (RunStatus::Passed, 47),
        ]);
        assert_eq!(summary(&VerificationSimulator::simulate(5, Utc::now())), vec![
            (RunStatus::Passed, 47),
            (RunStatus::Passed, 47),
            (RunStatus::Passed, 47),
        ]);
        assert_eq!(summary(&VerificationSimulator::simulate(6, Utc::now()))[1], (RunStatus::Failed, 42));
    }

    #[test]
    fn always_three_runs_with_increasing_timestamps() {
        let now = Utc::now();
        for bugs in [0, 3, 7, 11, 100] {
            let runs = VerificationSimulator::simulate(bugs, now);
            assert_eq!(runs.len(), 3);
            assert!(runs.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
            assert!(runs.iter().enumerate().all(|(i, r)| r.id == i + 1 && r.iteration == i + 1));
            assert!(runs.iter().all(|r| r.tests_run == 47));
            assert_eq!(runs[0].timestamp, now - Duration::minutes(6));
        }
    }

    #[test]
    fn checks_reflect_branch() {
        let failing = VerificationSimulator::simulate(20, Utc::now());
        assert!(failing[0].checks.contains(&"✗ Some unit tests failed".to_string()));
        assert!(failing[1].checks.contains(&"✗ Some tests still failing".to_string()));

        let passing = VerificationSimulator::simulate(0, Utc::now());
        assert!(passing.iter().all(|r| r.checks.iter().all(|c| c.starts_with('✓'))));
        assert_eq!(passing[2].checks.len(), 6);
    }
}
