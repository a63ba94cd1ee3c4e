//! # Score
//!
//! End-of-session scoring.

/// Points awarded per matched pair.
pub const POINTS_PER_PAIR: i32 = 1000;

/// Points deducted per elapsed second.
pub const PENALTY_PER_SECOND: f32 = 5.0;

/// Points deducted per card click.
pub const PENALTY_PER_CLICK: i32 = 10;

/// Computes the final score of a session, never below zero.
///
/// The time penalty is truncated toward zero before it is subtracted.
///
/// # Examples
///
/// ```
/// use memory_match::calculate_score;
///
/// assert_eq!(calculate_score(60.0, 10, 5), 4600);
/// assert_eq!(calculate_score(1000.0, 500, 2), 0);
/// ```
pub fn calculate_score(elapsed_secs: f32, clicks: u32, pairs: u32) -> u32 {
    let time_penalty = (elapsed_secs.max(0.0) * PENALTY_PER_SECOND) as i64;
    let score = i64::from(pairs) * i64::from(POINTS_PER_PAIR)
        - time_penalty
        - i64::from(clicks) * i64::from(PENALTY_PER_CLICK);
    score.clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_with_typical_inputs() {
        let expected = 5 * 1000 - (60.0_f32 * 5.0) as u32 - 10 * 10;
        assert_eq!(calculate_score(60.0, 10, 5), expected);
        assert_eq!(expected, 4600);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        assert_eq!(calculate_score(1000.0, 500, 2), 0);
    }

    #[test]
    fn test_score_without_penalties() {
        assert_eq!(calculate_score(0.0, 0, 3), 3000);
    }

    #[test]
    fn test_time_penalty_truncates() {
        // 1.3s * 5 = 6.5 -> 6
        assert_eq!(calculate_score(1.3, 0, 1), 994);
    }

    #[test]
    fn test_negative_time_is_treated_as_zero() {
        assert_eq!(calculate_score(-4.0, 0, 1), 1000);
    }
}
