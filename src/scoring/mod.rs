pub mod prioritizer;

pub use prioritizer::Prioritizer;

/// Guard against division by zero when a normalization ceiling is
/// configured as zero or negative.
const EPSILON: f64 = 1e-9;

/// Floor applied to non-positive recency half-lives.
const HALF_LIFE_FLOOR: f64 = 1e-6;

/// Clamp a normalized component into [0, 1]. Out-of-bound raw values
/// are silently truncated, never rejected.
fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Exponential recency decay: 1.0 at age 0, halving every
/// `half_life_hours`. Negative ages count as 0.
fn recency_factor(age_hours: f64, half_life_hours: f64) -> f64 {
    let half_life = half_life_hours.max(HALF_LIFE_FLOOR);
    0.5_f64.powf(age_hours.max(0.0) / half_life)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp01_truncates_both_ends() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(2.5), 1.0);
    }

    #[test]
    fn recency_is_one_at_age_zero() {
        assert_eq!(recency_factor(0.0, 6.0), 1.0);
    }

    #[test]
    fn recency_halves_every_half_life() {
        assert!((recency_factor(6.0, 6.0) - 0.5).abs() < 1e-12);
        assert!((recency_factor(12.0, 6.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn negative_age_is_treated_as_zero() {
        assert_eq!(recency_factor(-3.0, 6.0), 1.0);
    }

    #[test]
    fn non_positive_half_life_is_floored_not_fatal() {
        let decayed = recency_factor(1.0, 0.0);
        assert!(decayed.is_finite());
        assert!(decayed >= 0.0);

        let negative = recency_factor(1.0, -4.0);
        assert!(negative.is_finite());
        assert!(negative >= 0.0);
    }
}
