//! Score calculation
//!
//! A pure function of the difficulty profile, the ladder lengths, the elapsed
//! time and the hint count. The session gathers the inputs.

use crate::core::DifficultyProfile;
use std::time::Duration;

/// Extra moves beyond optimal that still earn part of the path bonus
const PARTIAL_BONUS_MOVES: usize = 2;

/// Inputs gathered from a finished session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInput {
    /// Edges in the reference (A*) ladder
    pub optimal_length: usize,
    /// Edges in the player's ladder
    pub user_length: usize,
    pub elapsed: Duration,
    pub hints_used: u32,
}

/// Every component of a score, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub base: i64,
    pub path_bonus: i64,
    /// Positive for a fast finish, negative for a slow one
    pub time_adjustment: i64,
    pub move_penalty: i64,
    pub hint_penalty: i64,
    pub extra_moves: usize,
    /// Clamped at zero
    pub total: u32,
}

/// Score a finished ladder under `profile`
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use word_ladder::core::Difficulty;
/// use word_ladder::game::{ScoreInput, calculate_score};
///
/// let score = calculate_score(
///     Difficulty::Beginner.profile(),
///     ScoreInput {
///         optimal_length: 3,
///         user_length: 3,
///         elapsed: Duration::from_secs(10),
///         hints_used: 0,
///     },
/// );
/// // 1000 base + 300 bonus - 20 for ten untimed seconds
/// assert_eq!(score.total, 1280);
/// ```
#[must_use]
pub fn calculate_score(profile: &DifficultyProfile, input: ScoreInput) -> ScoreBreakdown {
    let base = profile.base_score;
    let extra_moves = input.user_length.saturating_sub(input.optimal_length);

    let path_bonus = match extra_moves {
        0 => profile.optimal_path_bonus,
        n if n <= PARTIAL_BONUS_MOVES => {
            (profile.optimal_path_bonus as f64 * (1.0 - n as f64 / 5.0)) as i64
        }
        _ => 0,
    };

    let elapsed = input.elapsed.as_secs_f64();
    let time_adjustment = match profile.time_limit {
        Some(limit) => {
            let ratio = elapsed / limit.as_secs_f64();
            if ratio < 0.5 {
                ((0.5 - ratio) * base as f64 * 0.5) as i64
            } else if ratio > 0.8 {
                -(((ratio - 0.8) * base as f64 * 0.5) as i64)
            } else {
                0
            }
        }
        None => {
            let penalty = (elapsed * profile.time_factor) as i64;
            let cap = (base as f64 * 0.3) as i64;
            -penalty.min(cap)
        }
    };

    let move_penalty = extra_moves as i64 * profile.move_factor;

    // The i-th hint costs hint_factor * i
    let hints = i64::from(input.hints_used);
    let hint_penalty = profile.hint_factor * hints * (hints + 1) / 2;

    let raw = base + path_bonus + time_adjustment - move_penalty - hint_penalty;
    let total = u32::try_from(raw.max(0)).unwrap_or(u32::MAX);

    ScoreBreakdown {
        base,
        path_bonus,
        time_adjustment,
        move_penalty,
        hint_penalty,
        extra_moves,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn input(optimal: usize, user: usize, secs: u64, hints: u32) -> ScoreInput {
        ScoreInput {
            optimal_length: optimal,
            user_length: user,
            elapsed: Duration::from_secs(secs),
            hints_used: hints,
        }
    }

    fn beginner(input: ScoreInput) -> ScoreBreakdown {
        calculate_score(Difficulty::Beginner.profile(), input)
    }

    fn advanced(input: ScoreInput) -> ScoreBreakdown {
        calculate_score(Difficulty::Advanced.profile(), input)
    }

    #[test]
    fn optimal_path_gets_full_bonus() {
        let score = beginner(input(3, 3, 0, 0));
        assert_eq!(score.path_bonus, 300);
        assert_eq!(score.extra_moves, 0);
        assert_eq!(score.total, 1300);
    }

    #[test]
    fn shorter_than_reference_counts_as_optimal() {
        // A* may return a longer ladder than the player found
        let score = beginner(input(5, 3, 0, 0));
        assert_eq!(score.extra_moves, 0);
        assert_eq!(score.path_bonus, 300);
    }

    #[test]
    fn near_optimal_gets_partial_bonus() {
        assert_eq!(beginner(input(3, 4, 0, 0)).path_bonus, 240);
        assert_eq!(beginner(input(3, 5, 0, 0)).path_bonus, 180);
        assert_eq!(beginner(input(3, 6, 0, 0)).path_bonus, 0);
    }

    #[test]
    fn move_penalty_per_extra_move() {
        let score = beginner(input(3, 6, 0, 0));
        assert_eq!(score.move_penalty, 75);
        assert_eq!(score.total, 1000 - 75);
    }

    #[test]
    fn untimed_penalty_is_capped() {
        assert_eq!(beginner(input(3, 3, 10, 0)).time_adjustment, -20);
        // 2 per second would be 2000; capped at 30% of 1000
        assert_eq!(beginner(input(3, 3, 1000, 0)).time_adjustment, -300);
    }

    #[test]
    fn timed_fast_finish_bonus() {
        // 30s of 300s: ratio 0.1, bonus (0.4 * 2000 * 0.5)
        assert_eq!(advanced(input(4, 4, 30, 0)).time_adjustment, 400);
    }

    #[test]
    fn timed_middle_band_is_neutral() {
        assert_eq!(advanced(input(4, 4, 150, 0)).time_adjustment, 0);
        assert_eq!(advanced(input(4, 4, 240, 0)).time_adjustment, 0);
    }

    #[test]
    fn timed_slow_finish_penalty() {
        // 285s of 300s: ratio 0.95, penalty (0.15 * 2000 * 0.5) truncated
        assert_eq!(advanced(input(4, 4, 285, 0)).time_adjustment, -149);
        // 270s of 300s: 0.9 - 0.8 lands just under 0.1 in floating point
        assert_eq!(advanced(input(4, 4, 270, 0)).time_adjustment, -99);
    }

    #[test]
    fn hint_penalty_increases_per_hint() {
        assert_eq!(beginner(input(3, 3, 0, 1)).hint_penalty, 50);
        assert_eq!(beginner(input(3, 3, 0, 2)).hint_penalty, 150);
        assert_eq!(beginner(input(3, 3, 0, 3)).hint_penalty, 300);
    }

    #[test]
    fn score_never_increases_with_hints() {
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            let mut previous = u32::MAX;
            for hints in 0..10 {
                let score = calculate_score(profile, input(4, 5, 60, hints)).total;
                assert!(score <= previous);
                previous = score;
            }
        }
    }

    #[test]
    fn score_clamped_at_zero() {
        let score = calculate_score(Difficulty::Challenge.profile(), input(7, 40, 10_000, 9));
        assert_eq!(score.total, 0);
    }

    #[test]
    fn score_never_negative_across_inputs() {
        for difficulty in Difficulty::ALL {
            for user in [0, 3, 8, 20] {
                for secs in [0, 60, 200, 5000] {
                    for hints in [0, 1, 5] {
                        let score = calculate_score(difficulty.profile(), input(3, user, secs, hints));
                        let raw = score.base + score.path_bonus + score.time_adjustment
                            - score.move_penalty
                            - score.hint_penalty;
                        assert_eq!(i64::from(score.total), raw.max(0));
                    }
                }
            }
        }
    }
}
