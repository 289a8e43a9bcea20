//! Standard normal distribution helpers.

use statrs::distribution::{ContinuousCDF, Normal};

/// Φ⁻¹: the standard normal quantile. `0` and `1` map to infinities; anything
/// outside `[0, 1]` (including NaN) yields NaN.
pub fn quantile(p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    Normal::standard().inverse_cdf(p)
}

/// Φ: the standard normal cumulative distribution function.
pub fn cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    Normal::standard().cdf(x)
}
