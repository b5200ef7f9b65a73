//! Standard normal CDF via the Abramowitz–Stegun 7.1.26 rational
//! approximation of erf, and integer percentile conversion.
//!
//! Maximum absolute error of the erf approximation is 1.5e-7, well below
//! the resolution of an integer percentile.

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Φ(z) using the A&S erf approximation.
pub fn normal_cdf(z: f64) -> f64 {
    if z.is_nan() {
        return 0.5;
    }
    let sign = if z < 0.0 { -1.0 } else { 1.0 };
    let x = z.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let erf = 1.0 - poly * (-x * x).exp();

    0.5 * (1.0 + sign * erf)
}

/// Percentile (0–100) implied by a z-score.
pub fn percentile(z: f64) -> u8 {
    let pct = (normal_cdf(z) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_at_mean_is_50() {
        assert_eq!(percentile(0.0), 50);
    }

    #[test]
    fn test_known_points() {
        assert_eq!(percentile(1.0), 84);
        assert_eq!(percentile(-1.0), 16);
        assert_eq!(percentile(1.96), 98);
        assert_eq!(percentile(-2.0), 2);
    }

    #[test]
    fn test_extremes_clamp() {
        assert_eq!(percentile(10.0), 100);
        assert_eq!(percentile(-10.0), 0);
        assert_eq!(percentile(f64::INFINITY), 100);
        assert_eq!(percentile(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_nan_maps_to_median() {
        assert_eq!(percentile(f64::NAN), 50);
    }

    #[test]
    fn test_symmetry() {
        for i in 0..40 {
            let z = i as f64 * 0.1;
            let sum = normal_cdf(z) + normal_cdf(-z);
            // the A&S coefficients sum to 1 - 1e-9
            assert!((sum - 1.0).abs() < 1e-8, "z={z} sum={sum}");
            assert_eq!(percentile(z) as u32 + percentile(-z) as u32, 100, "z={z}");
        }
    }

    #[test]
    fn test_matches_statrs_at_integer_resolution() {
        use statrs::distribution::{ContinuousCDF, Normal};

        let reference = Normal::new(0.0, 1.0).unwrap();
        for i in -400..=400 {
            let z = i as f64 * 0.01;
            let exact = reference.cdf(z);
            assert!(
                (normal_cdf(z) - exact).abs() < 1e-6,
                "z={z}: approx={} exact={exact}",
                normal_cdf(z)
            );
        }
    }
}
