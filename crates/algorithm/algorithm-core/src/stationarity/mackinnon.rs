//! MacKinnon response-surface approximations for the Dickey-Fuller
//! distribution (constant-only regression, one series)

/// Statistic above which the p-value is 1
const TAU_MAX: f64 = 2.74;
/// Statistic below which the p-value is 0
const TAU_MIN: f64 = -18.83;
/// Switch point between the small-p and large-p polynomials
const TAU_STAR: f64 = -1.61;

const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

/// Critical value surfaces `c0 + c1/T + c2/T^2 + c3/T^3` for 1%, 5%, 10%
const TAU_CRIT: [[f64; 4]; 3] = [
    [-3.43035, -6.5393, -16.786, -79.433],
    [-2.86154, -2.8903, -4.234, -40.04],
    [-2.56677, -1.5384, -2.809, 0.0],
];

/// Approximate p-value of an ADF statistic
pub fn mackinnon_p_value(statistic: f64) -> f64 {
    if statistic.is_nan() {
        return f64::NAN;
    }
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }

    let z = if statistic <= TAU_STAR {
        polyval(&TAU_SMALL_P, statistic)
    } else {
        polyval(&TAU_LARGE_P, statistic)
    };
    normal_cdf(z)
}

/// Finite-sample critical values `(1%, 5%, 10%)` for `nobs` observations
pub fn mackinnon_critical_values(nobs: usize) -> (f64, f64, f64) {
    let inv = 1.0 / nobs.max(1) as f64;
    let at = |coeffs: &[f64; 4]| polyval(coeffs, inv);
    (at(&TAU_CRIT[0]), at(&TAU_CRIT[1]), at(&TAU_CRIT[2]))
}

/// Evaluate `c0 + c1*x + c2*x^2 + ...`
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Standard normal CDF approximation.
fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Error function approximation (Abramowitz-Stegun 7.1.26).
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p_value_at_five_percent_critical_value() {
        let p = mackinnon_p_value(-2.86154);
        assert!((p - 0.05).abs() < 0.005, "p = {}", p);
    }

    #[test]
    fn test_p_value_at_one_percent_critical_value() {
        let p = mackinnon_p_value(-3.43035);
        assert!((p - 0.01).abs() < 0.003, "p = {}", p);
    }

    #[test]
    fn test_p_value_bounds() {
        assert_eq!(mackinnon_p_value(3.0), 1.0);
        assert_eq!(mackinnon_p_value(-20.0), 0.0);
        assert!(mackinnon_p_value(f64::NAN).is_nan());
    }

    #[test]
    fn test_p_value_is_monotone() {
        let mut previous = 0.0;
        for i in 0..200 {
            let stat = -10.0 + i as f64 * 0.06;
            let p = mackinnon_p_value(stat);
            assert!(p >= previous - 1e-9, "p({}) = {} < {}", stat, p, previous);
            previous = p;
        }
    }

    #[test]
    fn test_p_value_continuous_across_switch_point() {
        let below = mackinnon_p_value(TAU_STAR - 1e-6);
        let above = mackinnon_p_value(TAU_STAR + 1e-6);
        assert!((below - above).abs() < 0.01, "{} vs {}", below, above);
        assert!(below > 0.4 && below < 0.55);
    }

    #[test]
    fn test_critical_values_large_sample() {
        let (c1, c5, c10) = mackinnon_critical_values(1_000_000);
        assert!((c1 + 3.43035).abs() < 1e-4);
        assert!((c5 + 2.86154).abs() < 1e-4);
        assert!((c10 + 2.56677).abs() < 1e-4);
    }

    #[test]
    fn test_critical_values_small_sample_are_more_negative() {
        let (c1, c5, c10) = mackinnon_critical_values(50);
        assert!(c1 < -3.43035);
        assert!(c5 < -2.86154);
        assert!(c10 < -2.56677);
        assert!(c1 < c5 && c5 < c10);
    }

    #[test]
    fn test_normal_cdf() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((normal_cdf(1.96) - 0.975).abs() < 1e-3);
    }
}
