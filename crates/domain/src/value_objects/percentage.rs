use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage(pub Decimal);

impl Percentage {
    /// Clamps `fraction` into `[0, 1]`.
    pub fn new(fraction: Decimal) -> Self {
        Self(fraction.clamp(Decimal::ZERO, Decimal::ONE))
    }

    /// Converts a whole-percent slider value (0..=100) to a fraction rounded to two places.
    pub fn from_whole_percent(percent: u32) -> Self {
        Self::new((Decimal::from(percent) / Decimal::from(100)).round_dp(2))
    }

    /// Whole-percent value for a slider.
    pub fn to_whole_percent(&self) -> u32 {
        (self.0 * Decimal::from(100)).round().to_u32().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Applies the fraction to an amount.
    pub fn of(&self, amount: Decimal) -> Decimal {
        amount * self.0
    }
}
