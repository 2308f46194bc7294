use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price of one quote unit expressed in base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    pub value: Decimal,
}

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Formats the price rounded to `decimals` places, keeping trailing zeros.
    #[must_use]
    pub fn to_fixed(&self, decimals: u32) -> String {
        format!("{:.*}", decimals as usize, self.value.round_dp(decimals))
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self { value }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_fixed() {
        assert_eq!(Price::new(dec!(123.456789)).to_fixed(4), "123.4568");
        assert_eq!(Price::new(dec!(100)).to_fixed(2), "100.00");
        assert_eq!(Price::new(dec!(0.5)).to_fixed(0), "0");
    }
}
