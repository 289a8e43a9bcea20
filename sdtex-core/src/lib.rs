pub mod counts;
pub mod error;
pub mod stimulus;
pub mod trial;

pub use counts::Counts;
pub use error::{RateKind, SdtError};
pub use stimulus::StimulusClass;
pub use trial::TrialSpec;
