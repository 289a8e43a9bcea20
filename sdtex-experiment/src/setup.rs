use std::fmt;
use std::iter;

use rand::Rng;
use rand::seq::SliceRandom;
use sdtex_core::{SdtError, StimulusClass, TrialSpec};
use serde::Serialize;

use crate::TrialSequence;

/// Non-fatal problems found while setting up a block.
///
/// Each warning is also emitted as a `tracing` event on the
/// `sdtex_experiment::setup` target; the returned values are the ones to
/// inspect programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SetupWarning {
    /// `n_trials` is not a multiple of `2 * conds`; the block is only
    /// approximately balanced.
    NotDivisible { n_trials: usize, divisor: usize },
    /// `n_trials` is odd, so present and absent can never be equal.
    OddTrialCount { n_trials: usize },
}

impl SetupWarning {
    fn emit(&self, conds: usize) {
        match *self {
            SetupWarning::NotDivisible { n_trials, divisor } => tracing::warn!(
                target: "sdtex_experiment::setup",
                n_trials,
                conds,
                divisor,
                "{}",
                self
            ),
            SetupWarning::OddTrialCount { n_trials } => tracing::warn!(
                target: "sdtex_experiment::setup",
                n_trials,
                conds,
                "{}",
                self
            ),
        }
    }
}

impl fmt::Display for SetupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupWarning::NotDivisible { n_trials, divisor } => write!(
                f,
                "number of trials ({n_trials}) is not divisible by {divisor}; conditions are unevenly balanced"
            ),
            SetupWarning::OddTrialCount { n_trials } => {
                write!(f, "number of trials ({n_trials}) is an odd number")
            }
        }
    }
}

/// Builds a shuffled block of `n_trials` (condition, stimulus) trials spread
/// over `conds` conditions.
///
/// When `n_trials` is a multiple of `2 * conds` every condition receives
/// `n_trials / conds` trials, half absent and half present. Otherwise each
/// condition contributes `c = n_trials / conds` (floored) absent *and* `c`
/// present trials, the oversized pool is shuffled and then cut down to
/// `n_trials`. The cut makes the split approximate: with
/// `dropped = 2 * conds * c - n_trials`, every (condition, stimulus) cell ends
/// up with between `c - dropped` (saturating at zero) and `c` trials.
///
/// The shuffle is the only source of randomness and draws from `rng`.
pub fn generate<R: Rng + ?Sized>(
    n_trials: usize,
    conds: usize,
    rng: &mut R,
) -> Result<TrialSequence, SdtError> {
    if n_trials == 0 {
        return Err(SdtError::invalid("n_trials", "must be a positive integer"));
    }
    if conds == 0 {
        return Err(SdtError::invalid("conds", "must be a positive integer"));
    }
    let divisor = conds
        .checked_mul(2)
        .ok_or_else(|| SdtError::invalid("conds", format!("{conds} conditions is too many")))?;
    let per_condition = n_trials / conds;

    let mut warnings = Vec::new();
    let mut trials = if n_trials % divisor == 0 {
        stimulus_pool(conds, per_condition / 2)
    } else {
        if per_condition == 0 {
            return Err(SdtError::invalid(
                "n_trials",
                format!("{n_trials} trials cannot cover {conds} conditions"),
            ));
        }
        warnings.push(SetupWarning::NotDivisible { n_trials, divisor });
        if n_trials % 2 != 0 {
            warnings.push(SetupWarning::OddTrialCount { n_trials });
        }
        for warning in &warnings {
            warning.emit(conds);
        }
        stimulus_pool(conds, per_condition)
    };

    trials.shuffle(rng);
    trials.truncate(n_trials);
    tracing::debug!(
        target: "sdtex_experiment::setup",
        n_trials,
        conds,
        balanced = warnings.is_empty(),
        "trial block generated"
    );

    Ok(TrialSequence::new(trials, warnings))
}

/// `per_class` absent then `per_class` present trials for each condition, in order.
fn stimulus_pool(conds: usize, per_class: usize) -> Vec<TrialSpec> {
    let mut pool = Vec::with_capacity(conds * per_class * 2);
    for condition in 0..conds {
        for stimulus in StimulusClass::ALL {
            pool.extend(iter::repeat_n(TrialSpec::new(condition, stimulus), per_class));
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use StimulusClass::{Absent, Present};

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn pool_is_ordered_by_condition_then_stimulus() {
        let pool = stimulus_pool(2, 2);
        let pairs: Vec<(usize, u8)> = pool.into_iter().map(Into::into).collect();
        assert_eq!(
            pairs,
            vec![(0, 0), (0, 0), (0, 1), (0, 1), (1, 0), (1, 0), (1, 1), (1, 1)]
        );
    }

    #[test]
    fn balanced_block_splits_every_condition_evenly() {
        let seq = generate(40, 2, &mut rng(1)).unwrap();
        assert_eq!(seq.len(), 40);
        assert!(seq.is_balanced());
        for condition in 0..2 {
            assert_eq!(seq.condition_count(condition), 20);
            assert_eq!(seq.cell_count(condition, Absent), 10);
            assert_eq!(seq.cell_count(condition, Present), 10);
        }
    }

    #[test]
    fn single_condition_uses_code_zero() {
        let seq = generate(10, 1, &mut rng(3)).unwrap();
        assert!(seq.iter().all(|t| t.condition() == 0));
        assert_eq!(seq.cell_count(0, Present), 5);
    }

    #[test]
    fn uneven_block_warns_and_truncates() {
        let seq = generate(7, 2, &mut rng(5)).unwrap();
        assert_eq!(seq.len(), 7);
        assert_eq!(
            seq.warnings(),
            &[
                SetupWarning::NotDivisible {
                    n_trials: 7,
                    divisor: 4
                },
                SetupWarning::OddTrialCount { n_trials: 7 },
            ]
        );
        // c = 3, pool = 12, dropped = 5: every cell holds at most 3 trials.
        for condition in 0..2 {
            assert!(seq.cell_count(condition, Absent) <= 3);
            assert!(seq.cell_count(condition, Present) <= 3);
        }
    }

    #[test]
    fn even_but_not_divisible_only_warns_once() {
        let seq = generate(10, 3, &mut rng(8)).unwrap();
        assert_eq!(seq.len(), 10);
        assert_eq!(
            seq.warnings(),
            &[SetupWarning::NotDivisible {
                n_trials: 10,
                divisor: 6
            }]
        );
    }

    #[test]
    fn rejects_zero_arguments() {
        assert!(matches!(
            generate(0, 2, &mut rng(0)),
            Err(SdtError::InvalidArgument { name: "n_trials", .. })
        ));
        assert!(matches!(
            generate(10, 0, &mut rng(0)),
            Err(SdtError::InvalidArgument { name: "conds", .. })
        ));
    }

    #[test]
    fn rejects_fewer_trials_than_conditions() {
        assert!(matches!(
            generate(3, 4, &mut rng(0)),
            Err(SdtError::InvalidArgument { name: "n_trials", .. })
        ));
    }

    #[test]
    fn warning_text_is_readable() {
        let warning = SetupWarning::OddTrialCount { n_trials: 7 };
        assert_eq!(warning.to_string(), "number of trials (7) is an odd number");
    }
}
