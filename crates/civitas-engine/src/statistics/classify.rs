//! Ordinal classification of z-scores.

use super::types::Classification;

/// Classify a z-score after adjusting for polarity.
///
/// Thresholds on the adjusted score `s`: `s <= -2` critical, `s <= -1`
/// below, `s <= 1` average, `s <= 2` above, otherwise excellent.
pub fn classify(z_score: f64, higher_is_better: bool) -> Classification {
    let score = if higher_is_better { z_score } else { -z_score };
    if score.is_nan() {
        Classification::Average
    } else if score <= -2.0 {
        Classification::Critical
    } else if score <= -1.0 {
        Classification::Below
    } else if score <= 1.0 {
        Classification::Average
    } else if score <= 2.0 {
        Classification::Above
    } else {
        Classification::Excellent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(classify(-2.0, true), Classification::Critical);
        assert_eq!(classify(-1.0, true), Classification::Below);
        assert_eq!(classify(1.0, true), Classification::Average);
        assert_eq!(classify(2.0, true), Classification::Above);
        assert_eq!(classify(2.0001, true), Classification::Excellent);
        assert_eq!(classify(-1.9999, true), Classification::Below);
    }

    #[test]
    fn test_polarity_flips_sign() {
        // High infant mortality is bad.
        assert_eq!(classify(2.5, false), Classification::Critical);
        assert_eq!(classify(-2.5, false), Classification::Excellent);
        assert_eq!(classify(0.0, false), Classification::Average);
    }

    #[test]
    fn test_nan_is_average() {
        assert_eq!(classify(f64::NAN, true), Classification::Average);
    }
}
