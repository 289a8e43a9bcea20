use std::fmt;
use std::str::FromStr;

use sdtex_core::{Counts, SdtError};
use serde::{Deserialize, Serialize};

use crate::SdtResult;
use crate::normal::{cdf, quantile};

/// How hit and false alarm rates are obtained from the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Correction {
    /// Rates of exactly 0 or 1 are replaced by `0.5 / n` and `1 - 0.5 / n`.
    #[default]
    Extreme,
    /// Adds 0.5 to hits and false alarms and 1 to both trial totals.
    #[serde(alias = "log-linear", alias = "log_linear")]
    LogLinear,
    /// Non-parametric A′ on the uncorrected rates.
    Aprime,
}

impl Correction {
    pub fn compute(self, counts: &Counts) -> Result<SdtResult, SdtError> {
        match self {
            Correction::Extreme => extreme_value_correction(counts),
            Correction::LogLinear => log_linear_correction(counts),
            Correction::Aprime => non_parametric_aprime(counts),
        }
    }

    /// Like [`Correction::compute`] but never fails: empty denominators and a
    /// degenerate A′ show up as NaN metrics instead of errors.
    pub fn compute_or_nan(self, counts: &Counts) -> SdtResult {
        match self {
            Correction::Extreme => {
                let (hit_rate, fa_rate) = extreme_rates(counts);
                parametric(hit_rate, fa_rate)
            }
            Correction::LogLinear => {
                let (hit_rate, fa_rate) = log_linear_rates(counts);
                parametric(hit_rate, fa_rate)
            }
            Correction::Aprime => {
                let (hit_rate, fa_rate) = raw_rates(counts);
                let aprime = aprime(hit_rate, fa_rate).unwrap_or(f64::NAN);
                SdtResult::NonParametric {
                    aprime,
                    hit_rate,
                    fa_rate,
                }
            }
        }
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Correction::Extreme => "extreme",
            Correction::LogLinear => "loglinear",
            Correction::Aprime => "aprime",
        })
    }
}

impl FromStr for Correction {
    type Err = SdtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "extreme" => Ok(Correction::Extreme),
            "loglinear" | "log-linear" | "log_linear" => Ok(Correction::LogLinear),
            "aprime" | "a'" => Ok(Correction::Aprime),
            _ => Err(SdtError::UnknownCorrection(s.to_string())),
        }
    }
}

/// d′, β, c and Ad′ with floor and ceiling rates replaced by half a trial.
///
/// A hit rate of exactly 1 becomes `1 - 0.5 / (hits + misses)` and a rate of
/// exactly 0 becomes `0.5 / (hits + misses)`; false alarms likewise with
/// `fas + crs`.
pub fn extreme_value_correction(counts: &Counts) -> Result<SdtResult, SdtError> {
    counts.validate()?;
    let (hit_rate, fa_rate) = extreme_rates(counts);
    Ok(parametric(hit_rate, fa_rate))
}

/// d′, β, c and Ad′ after the log-linear correction (Stanislaw & Todorov, 1999).
/// The corrected rates can never reach 0 or 1.
pub fn log_linear_correction(counts: &Counts) -> Result<SdtResult, SdtError> {
    counts.validate()?;
    let (hit_rate, fa_rate) = log_linear_rates(counts);
    Ok(parametric(hit_rate, fa_rate))
}

/// A′ (Pollack & Norman, 1979, as adapted by Stanislaw & Todorov, 1999) on the
/// uncorrected rates.
///
/// Fails with [`SdtError::DegenerateInput`] when both rates are 0 or both are 1.
pub fn non_parametric_aprime(counts: &Counts) -> Result<SdtResult, SdtError> {
    counts.validate()?;
    let (hit_rate, fa_rate) = raw_rates(counts);
    let aprime = aprime(hit_rate, fa_rate)?;
    Ok(SdtResult::NonParametric {
        aprime,
        hit_rate,
        fa_rate,
    })
}

fn raw_rates(counts: &Counts) -> (f64, f64) {
    (
        counts.hits as f64 / counts.signal_trials() as f64,
        counts.fas as f64 / counts.noise_trials() as f64,
    )
}

fn extreme_rates(counts: &Counts) -> (f64, f64) {
    let (hit_rate, fa_rate) = raw_rates(counts);
    (
        clamp_extreme(hit_rate, counts.signal_trials()),
        clamp_extreme(fa_rate, counts.noise_trials()),
    )
}

fn clamp_extreme(rate: f64, total: u64) -> f64 {
    let half = 0.5 / total as f64;
    if rate == 1.0 {
        1.0 - half
    } else if rate == 0.0 {
        half
    } else {
        rate
    }
}

fn log_linear_rates(counts: &Counts) -> (f64, f64) {
    let hits = counts.hits as f64 + 0.5;
    let fas = counts.fas as f64 + 0.5;
    (
        hits / (hits + counts.misses as f64 + 1.0),
        fas / (fas + counts.crs as f64 + 1.0),
    )
}

fn parametric(hit_rate: f64, fa_rate: f64) -> SdtResult {
    let z_hit = quantile(hit_rate);
    let z_fa = quantile(fa_rate);
    let d = z_hit - z_fa;
    SdtResult::Parametric {
        d,
        beta: ((z_fa * z_fa - z_hit * z_hit) / 2.0).exp(),
        c: (z_hit + z_fa) / 2.0,
        ad: cdf(d / std::f64::consts::SQRT_2),
        hit_rate,
        fa_rate,
    }
}

fn aprime(hit_rate: f64, fa_rate: f64) -> Result<f64, SdtError> {
    let diff = hit_rate - fa_rate;
    let denominator = 4.0 * hit_rate.max(fa_rate) - 4.0 * hit_rate * fa_rate;
    if denominator == 0.0 {
        return Err(SdtError::DegenerateInput { hit_rate, fa_rate });
    }
    // sign(0) is 0, so equal rates give exactly 0.5
    let sign = if diff > 0.0 {
        1.0
    } else if diff < 0.0 {
        -1.0
    } else {
        0.0
    };
    Ok(0.5 + sign * (diff * diff + diff.abs()) / denominator)
}
