use serde::{Deserialize, Serialize};

use crate::{RateKind, SdtError, StimulusClass};

/// Outcome counts of a yes/no detection block.
///
/// Partitioning raw responses into these four buckets is left to the caller;
/// [`Counts::from_responses`] folds already-labelled outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Counts {
    pub hits: u64,
    pub misses: u64,
    pub fas: u64,
    pub crs: u64,
}

impl Counts {
    pub fn new(hits: u64, misses: u64, fas: u64, crs: u64) -> Self {
        Self {
            hits,
            misses,
            fas,
            crs,
        }
    }

    /// Trials on which the stimulus was present. Saturates at `u64::MAX`;
    /// [`Counts::validate`] rejects totals that do not fit.
    pub fn signal_trials(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }

    /// Trials on which the stimulus was absent. Saturates like
    /// [`Counts::signal_trials`].
    pub fn noise_trials(&self) -> u64 {
        self.fas.saturating_add(self.crs)
    }

    /// Both rate denominators must be non-zero and fit in a `u64`.
    pub fn validate(&self) -> Result<(), SdtError> {
        let signal = self
            .hits
            .checked_add(self.misses)
            .ok_or_else(|| SdtError::invalid("hits + misses", "total overflows u64"))?;
        let noise = self
            .fas
            .checked_add(self.crs)
            .ok_or_else(|| SdtError::invalid("fas + crs", "total overflows u64"))?;
        if signal == 0 {
            return Err(SdtError::UndefinedRate {
                which: RateKind::Hit,
            });
        }
        if noise == 0 {
            return Err(SdtError::UndefinedRate {
                which: RateKind::FalseAlarm,
            });
        }
        Ok(())
    }

    pub fn record(&mut self, stimulus: StimulusClass, said_yes: bool) {
        match (stimulus, said_yes) {
            (StimulusClass::Present, true) => self.hits += 1,
            (StimulusClass::Present, false) => self.misses += 1,
            (StimulusClass::Absent, true) => self.fas += 1,
            (StimulusClass::Absent, false) => self.crs += 1,
        }
    }

    pub fn from_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = (StimulusClass, bool)>,
    {
        responses.into_iter().collect()
    }
}

impl FromIterator<(StimulusClass, bool)> for Counts {
    fn from_iter<I: IntoIterator<Item = (StimulusClass, bool)>>(iter: I) -> Self {
        let mut counts = Counts::default();
        for (stimulus, said_yes) in iter {
            counts.record(stimulus, said_yes);
        }
        counts
    }
}
