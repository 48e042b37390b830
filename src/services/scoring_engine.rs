use crate::config::constants::{ITERATION_PENALTY, SPEED_BONUS_MAX};
use crate::structs::score::Score;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Pure function of its inputs.
    ///
    /// * `base` = fixes / bugs × 100, rounded; 100 when nothing was detected
    /// * `speed_bonus` = max(0, 20 − whole elapsed minutes)
    /// * `efficiency_penalty` = −2 per iteration beyond the first
    /// * `final` = sum clamped to 0..=100
    pub fn score(bugs_detected: usize, fixes_applied: usize, elapsed_ms: u64, iteration_count: usize) -> Score {
        let base = if bugs_detected == 0 {
            100
        } else {
            let ratio = fixes_applied as f64 / bugs_detected as f64;
            (ratio * 100.0).round() as i64
        };

        let elapsed_minutes = i64::try_from(elapsed_ms / 60_000).unwrap_or(i64::MAX);
        let speed_bonus = (SPEED_BONUS_MAX - elapsed_minutes.min(SPEED_BONUS_MAX)).max(0);

        let extra_iterations = i64::try_from(iteration_count.saturating_sub(1)).unwrap_or(i64::MAX / ITERATION_PENALTY);
        let efficiency_penalty = -extra_iterations.saturating_mul(ITERATION_PENALTY);

        let final_score = base
            .saturating_add(speed_bonus)
            .saturating_add(efficiency_penalty)
            .clamp(0, 100);

        Score {
            base,
            speed_bonus,
            efficiency_penalty,
            final_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn perfect_run_is_clamped_to_hundred() {
        let score = ScoringEngine::score(10, 10, 90_000, 3);
        assert_eq!(score, Score { base: 100, speed_bonus: 19, efficiency_penalty: -4, final_score: 100 });
    }

    #[test]
    fn partial_fixes_round_to_nearest() {
        let score = ScoringEngine::score(3, 2, 0, 1);
        assert_eq!(score.base, 67);
        assert_eq!(score.speed_bonus, 20);
        assert_eq!(score.efficiency_penalty, 0);
        assert_eq!(score.final_score, 87);
    }

    #[test]
    fn speed_bonus_bottoms_out_at_zero() {
        assert_eq!(ScoringEngine::score(4, 1, 25 * 60_000, 3).speed_bonus, 0);
        assert_eq!(ScoringEngine::score(4, 1, 19 * 60_000 + 59_999, 3).speed_bonus, 1);
        assert_eq!(ScoringEngine::score(4, 0, 60 * 60_000, 10).final_score, 0);
    }

    #[test]
    fn no_defects_scores_full_base() {
        let score = ScoringEngine::score(0, 0, 120_000, 3);
        assert_eq!(score.base, 100);
        assert_eq!(score.final_score, 100);
    }

    proptest! {
        #[test]
        fn final_score_is_always_bounded(
            bugs in 0usize..10_000,
            fixed_share in 0.0f64..=1.0,
            elapsed in 0u64..u64::MAX,
            iterations in 0usize..1_000,
        ) {
            let fixes = (bugs as f64 * fixed_share) as usize;
            let first = ScoringEngine::score(bugs, fixes, elapsed, iterations);
            prop_assert!((0..=100).contains(&first.final_score));
            prop_assert!(first.speed_bonus >= 0);
            prop_assert!(first.efficiency_penalty <= 0);
            prop_assert_eq!(first, ScoringEngine::score(bugs, fixes, elapsed, iterations));
        }
    }
}
