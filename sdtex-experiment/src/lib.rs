pub mod config;
pub mod sequence;
pub mod setup;
pub use config::SetupConfig;
pub use sequence::TrialSequence;
pub use setup::{SetupWarning, generate};
