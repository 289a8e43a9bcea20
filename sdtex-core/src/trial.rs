use serde::{Deserialize, Serialize};

use crate::StimulusClass;

/// One planned trial: which condition it belongs to and whether the stimulus
/// is shown. Serializes as `[condition, stimulus_code]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrialSpec(usize, StimulusClass);

impl TrialSpec {
    pub fn new(condition: usize, stimulus: StimulusClass) -> Self {
        Self(condition, stimulus)
    }

    pub fn condition(&self) -> usize {
        self.0
    }

    pub fn stimulus(&self) -> StimulusClass {
        self.1
    }
}

impl From<TrialSpec> for (usize, u8) {
    fn from(spec: TrialSpec) -> Self {
        (spec.condition(), spec.stimulus().code())
    }
}
