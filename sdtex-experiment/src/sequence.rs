use sdtex_core::{StimulusClass, TrialSpec};
use serde::Serialize;

use crate::SetupWarning;

/// A shuffled list of trials together with any warnings raised while building it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSequence {
    trials: Vec<TrialSpec>,
    warnings: Vec<SetupWarning>,
}

impl TrialSequence {
    pub(crate) fn new(trials: Vec<TrialSpec>, warnings: Vec<SetupWarning>) -> Self {
        Self { trials, warnings }
    }

    pub fn trials(&self) -> &[TrialSpec] {
        &self.trials
    }

    pub fn warnings(&self) -> &[SetupWarning] {
        &self.warnings
    }

    /// True when every condition got an exact half/half split.
    pub fn is_balanced(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrialSpec> {
        self.trials.iter()
    }

    pub fn into_trials(self) -> Vec<TrialSpec> {
        self.trials
    }

    /// Number of trials in `condition`.
    pub fn condition_count(&self, condition: usize) -> usize {
        self.iter().filter(|t| t.condition() == condition).count()
    }

    /// Number of trials in `condition` with the given stimulus class.
    pub fn cell_count(&self, condition: usize, stimulus: StimulusClass) -> usize {
        self.iter()
            .filter(|t| t.condition() == condition && t.stimulus() == stimulus)
            .count()
    }
}

impl<'a> IntoIterator for &'a TrialSequence {
    type Item = &'a TrialSpec;
    type IntoIter = std::slice::Iter<'a, TrialSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.trials.iter()
    }
}

impl IntoIterator for TrialSequence {
    type Item = TrialSpec;
    type IntoIter = std::vec::IntoIter<TrialSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.trials.into_iter()
    }
}
