//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Creates a Percentage from a wire number, clamping negatives to 0 and
    /// large values to 100. Fractions round half-up.
    pub fn saturating_from_f64(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Self::ZERO;
        }
        if value >= 100.0 {
            return Self::HUNDRED;
        }
        Self((value + 0.5).floor() as u8)
    }

    /// `part / whole` as a whole-number percentage, rounded half-up.
    ///
    /// A zero `whole` yields zero. Ratios above one clamp to 100.
    pub fn from_ratio(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = u64::from(part);
        let whole = u64::from(whole);
        // round(part * 100 / whole) == floor((200 * part + whole) / (2 * whole))
        let rounded = (200 * part + whole) / (2 * whole);
        Self(rounded.min(100) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true at exactly one hundred percent.
    pub fn is_full(&self) -> bool {
        self.0 == 100
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "percentage");
                assert_eq!((min, max, actual), (0, 100, 101));
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(Percentage::try_new(100).is_ok());
    }

    #[test]
    fn from_ratio_guards_zero_whole() {
        assert_eq!(Percentage::from_ratio(0, 0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(7, 0), Percentage::ZERO);
    }

    #[test]
    fn from_ratio_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(Percentage::from_ratio(1, 8).value(), 13);
        // 1/3 = 33.33%
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        // 2/3 = 66.67%
        assert_eq!(Percentage::from_ratio(2, 3).value(), 67);
        // 1/200 = 0.5%
        assert_eq!(Percentage::from_ratio(1, 200).value(), 1);
    }

    #[test]
    fn from_ratio_clamps_overflowing_ratio() {
        assert_eq!(Percentage::from_ratio(12, 10), Percentage::HUNDRED);
    }

    #[test]
    fn saturating_from_f64_handles_wire_noise() {
        assert_eq!(Percentage::saturating_from_f64(-4.0), Percentage::ZERO);
        assert_eq!(Percentage::saturating_from_f64(f64::NAN), Percentage::ZERO);
        assert_eq!(Percentage::saturating_from_f64(87.5).value(), 88);
        assert_eq!(Percentage::saturating_from_f64(140.0), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_displays_with_sign() {
        assert_eq!(Percentage::new(75).to_string(), "75%");
        assert_eq!(Percentage::ZERO.to_string(), "0%");
    }

    #[test]
    fn percentage_serializes_transparently() {
        assert_eq!(serde_json::to_string(&Percentage::new(42)).unwrap(), "42");
        let pct: Percentage = serde_json::from_str("75").unwrap();
        assert_eq!(pct.value(), 75);
    }
}
