use serde::{Deserialize, Serialize};

use crate::SdtError;

/// Stimulus class of a trial. The numeric codes are part of the data format:
/// absent is always `0`, present is always `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum StimulusClass {
    Absent = 0,
    Present = 1,
}

impl StimulusClass {
    pub const ALL: [StimulusClass; 2] = [StimulusClass::Absent, StimulusClass::Present];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_present(self) -> bool {
        matches!(self, StimulusClass::Present)
    }
}

impl From<StimulusClass> for u8 {
    fn from(class: StimulusClass) -> Self {
        class.code()
    }
}

impl TryFrom<u8> for StimulusClass {
    type Error = SdtError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(StimulusClass::Absent),
            1 => Ok(StimulusClass::Present),
            other => Err(SdtError::invalid(
                "stimulus",
                format!("code {other} is neither 0 (absent) nor 1 (present)"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_fixed() {
        assert_eq!(StimulusClass::Absent.code(), 0);
        assert_eq!(StimulusClass::Present.code(), 1);
        assert_eq!(StimulusClass::try_from(1), Ok(StimulusClass::Present));
        assert!(StimulusClass::try_from(2).is_err());
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&StimulusClass::Present).unwrap();
        assert_eq!(json, "1");
        let back: StimulusClass = serde_json::from_str("0").unwrap();
        assert_eq!(back, StimulusClass::Absent);
        assert!(serde_json::from_str::<StimulusClass>("3").is_err());
    }
}
