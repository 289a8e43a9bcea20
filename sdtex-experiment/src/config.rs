use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;
use sdtex_core::SdtError;
use serde::{Deserialize, Serialize};

use crate::{TrialSequence, generate};

/// Parameters of an SDT block setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupConfig {
    pub n_trials: usize,
    pub conds: usize,
    /// Fixed seed for a reproducible order. `None` draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            n_trials: 100,
            conds: 1,
            seed: None,
        }
    }
}

impl SetupConfig {
    pub fn new(n_trials: usize, conds: usize) -> Self {
        Self {
            n_trials,
            conds,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a JSON document such as `{"n_trials": 40, "conds": 2, "seed": 7}`.
    /// Fractional or negative counts are rejected by the parser.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn generate(&self) -> Result<TrialSequence, SdtError> {
        match self.seed {
            Some(seed) => self.generate_with(&mut StdRng::seed_from_u64(seed)),
            None => self.generate_with(&mut rand::rng()),
        }
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrialSequence, SdtError> {
        generate(self.n_trials, self.conds, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_config() {
        let config = SetupConfig::from_json(r#"{"n_trials": 40, "conds": 2, "seed": 7}"#).unwrap();
        assert_eq!(config, SetupConfig::new(40, 2).with_seed(7));

        let config = SetupConfig::from_json(r#"{"n_trials": 10, "conds": 1}"#).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rejects_non_integer_counts() {
        assert!(SetupConfig::from_json(r#"{"n_trials": 10.5, "conds": 2}"#).is_err());
        assert!(SetupConfig::from_json(r#"{"n_trials": -4, "conds": 2}"#).is_err());
        assert!(SetupConfig::from_json(r#"{"n_trials": 10, "conds": 2, "extra": 1}"#).is_err());
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = SetupConfig::new(24, 3).with_seed(99);
        assert_eq!(config.generate().unwrap(), config.generate().unwrap());
    }
}
