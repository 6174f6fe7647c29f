//! Validated pin count for a single roll.

use serde::Serialize;

use crate::error::DomainError;

/// Number of pins knocked down by one roll, always within `[0, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Pins(u8);

impl Pins {
    /// No pins down.
    pub const ZERO: Pins = Pins(0);

    /// Every pin down.
    pub const MAX: Pins = Pins(10);

    /// Validates a raw pin count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRollValue` if `pins` is outside `[0, 10]`.
    pub fn new(pins: i32) -> Result<Self, DomainError> {
        match u8::try_from(pins) {
            Ok(value) if value <= Self::MAX.0 => Ok(Self(value)),
            _ => Err(DomainError::InvalidRollValue(pins)),
        }
    }

    /// Returns the pin count.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` if every pin fell.
    #[must_use]
    pub fn is_all(self) -> bool {
        self == Self::MAX
    }
}

impl TryFrom<i32> for Pins {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pins> for u32 {
    fn from(pins: Pins) -> Self {
        u32::from(pins.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_full_range() {
        for raw in 0..=10 {
            let pins = Pins::new(raw).unwrap();
            assert_eq!(i32::from(pins.get()), raw);
        }
    }

    #[test]
    fn test_new_rejects_negative() {
        assert_eq!(Pins::new(-1), Err(DomainError::InvalidRollValue(-1)));
    }

    #[test]
    fn test_new_rejects_more_than_ten() {
        assert_eq!(Pins::new(11), Err(DomainError::InvalidRollValue(11)));
        assert_eq!(Pins::new(256), Err(DomainError::InvalidRollValue(256)));
    }

    #[test]
    fn test_try_from_matches_new() {
        assert_eq!(Pins::try_from(10), Ok(Pins::MAX));
        assert_eq!(Pins::try_from(11), Err(DomainError::InvalidRollValue(11)));
    }

    #[test]
    fn test_is_all_only_for_ten() {
        assert!(Pins::MAX.is_all());
        assert!(!Pins::new(9).unwrap().is_all());
        assert!(!Pins::ZERO.is_all());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let value = serde_json::to_value(Pins::new(7).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!(7));
    }
}
