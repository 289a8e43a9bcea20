use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Output of one metric computation.
///
/// Serializes as a flat map keyed by the conventional metric names:
/// `d`, `beta`, `c`, `Ad`, `hit_rate`, `fa_rate` for the parametric
/// corrections and `Aprime`, `hit_rate`, `fa_rate` for A′.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SdtResult {
    Parametric {
        d: f64,
        beta: f64,
        c: f64,
        #[serde(rename = "Ad")]
        ad: f64,
        hit_rate: f64,
        fa_rate: f64,
    },
    NonParametric {
        #[serde(rename = "Aprime")]
        aprime: f64,
        hit_rate: f64,
        fa_rate: f64,
    },
}

impl SdtResult {
    pub fn hit_rate(&self) -> f64 {
        match *self {
            SdtResult::Parametric { hit_rate, .. } | SdtResult::NonParametric { hit_rate, .. } => {
                hit_rate
            }
        }
    }

    pub fn fa_rate(&self) -> f64 {
        match *self {
            SdtResult::Parametric { fa_rate, .. } | SdtResult::NonParametric { fa_rate, .. } => {
                fa_rate
            }
        }
    }

    /// d′, if this is a parametric result.
    pub fn d_prime(&self) -> Option<f64> {
        match *self {
            SdtResult::Parametric { d, .. } => Some(d),
            SdtResult::NonParametric { .. } => None,
        }
    }

    /// A′, if this is a non-parametric result.
    pub fn aprime(&self) -> Option<f64> {
        match *self {
            SdtResult::NonParametric { aprime, .. } => Some(aprime),
            SdtResult::Parametric { .. } => None,
        }
    }

    /// Looks a metric up by its conventional name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.entries().into_iter().collect()
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        match *self {
            SdtResult::Parametric {
                d,
                beta,
                c,
                ad,
                hit_rate,
                fa_rate,
            } => vec![
                ("d", d),
                ("beta", beta),
                ("c", c),
                ("Ad", ad),
                ("hit_rate", hit_rate),
                ("fa_rate", fa_rate),
            ],
            SdtResult::NonParametric {
                aprime,
                hit_rate,
                fa_rate,
            } => vec![("Aprime", aprime), ("hit_rate", hit_rate), ("fa_rate", fa_rate)],
        }
    }
}
