use std::fmt;

use thiserror::Error;

/// Which of the two response rates a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateKind {
    /// `hits / (hits + misses)`
    Hit,
    /// `fas / (fas + crs)`
    FalseAlarm,
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateKind::Hit => f.write_str("hit rate (hits + misses)"),
            RateKind::FalseAlarm => f.write_str("false alarm rate (fas + crs)"),
        }
    }
}

/// Errors raised by trial generation and metric computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdtError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("undefined {which}: denominator is zero")]
    UndefinedRate { which: RateKind },

    #[error("A' is undefined for hit rate {hit_rate} and false alarm rate {fa_rate}")]
    DegenerateInput { hit_rate: f64, fa_rate: f64 },

    #[error("unknown correction `{0}` (expected extreme, loglinear or aprime)")]
    UnknownCorrection(String),
}

impl SdtError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SdtError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_rate() {
        let err = SdtError::UndefinedRate {
            which: RateKind::Hit,
        };
        assert_eq!(
            err.to_string(),
            "undefined hit rate (hits + misses): denominator is zero"
        );

        let err = SdtError::invalid("conds", "must be positive");
        assert_eq!(err.to_string(), "invalid argument `conds`: must be positive");
    }
}
