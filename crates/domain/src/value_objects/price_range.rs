use crate::error::MathError;
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lower_price: Price,
    pub upper_price: Price,
}

impl PriceRange {
    pub fn new(lower: Price, upper: Price) -> Self {
        Self {
            lower_price: lower,
            upper_price: upper,
        }
    }

    /// Builds a range, requiring `0 <= lower < upper`.
    pub fn try_new(lower: Decimal, upper: Decimal) -> Result<Self, MathError> {
        if lower < Decimal::ZERO || lower >= upper {
            return Err(MathError::InvalidRange { lower, upper });
        }
        Ok(Self::new(Price::new(lower), Price::new(upper)))
    }

    pub fn contains(&self, price: Price) -> bool {
        price.value >= self.lower_price.value && price.value <= self.upper_price.value
    }

    /// Scales both bounds of `price` by the given multipliers.
    pub fn around(price: Price, lower_multiplier: Decimal, upper_multiplier: Decimal) -> Self {
        Self::new(
            Price::new(price.value * lower_multiplier),
            Price::new(price.value * upper_multiplier),
        )
    }
}
