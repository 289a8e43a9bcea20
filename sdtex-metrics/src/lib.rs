//! Signal detection sensitivity and bias measures computed from outcome counts.

pub mod correction;
pub mod normal;
pub mod result;

pub use correction::{
    Correction, extreme_value_correction, log_linear_correction, non_parametric_aprime,
};
pub use result::SdtResult;
