//! Overview of an existing position.

use crate::range_selector::INFINITY_SYMBOL;
use crate::remove::RemoveLiquidityConfig;
use clmm_range_domain::MathError;
use clmm_range_domain::enums::RangeStatus;
use clmm_range_domain::value_objects::{Percentage, Price, PriceRange};
use rust_decimal::Decimal;
use serde::Serialize;

/// Bounds and amounts of an open position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionOverview {
    /// Price bounds.
    pub range: PriceRange,
    /// Base amount held.
    pub base_amount: Decimal,
    /// Quote amount held.
    pub quote_amount: Decimal,
    /// Opened as a full-range position.
    pub passive: bool,
}

impl PositionOverview {
    #[must_use]
    pub fn new(range: PriceRange, base_amount: Decimal, quote_amount: Decimal, passive: bool) -> Self {
        Self {
            range,
            base_amount,
            quote_amount,
            passive,
        }
    }

    /// Where the current price sits relative to the bounds.
    pub fn status(&self, current_price: Price) -> RangeStatus {
        if self.passive {
            RangeStatus::FullRange
        } else if self.range.contains(current_price) {
            RangeStatus::InRange
        } else {
            RangeStatus::OutOfRange
        }
    }

    /// Lower bound text; `0` for a passive position.
    pub fn display_lower(&self, price_decimal: u32) -> String {
        if self.passive {
            "0".to_string()
        } else {
            self.range.lower_price.to_fixed(price_decimal)
        }
    }

    /// Upper bound text; `∞` for a passive position.
    pub fn display_upper(&self, price_decimal: u32) -> String {
        if self.passive {
            INFINITY_SYMBOL.to_string()
        } else {
            self.range.upper_price.to_fixed(price_decimal)
        }
    }

    /// Share of the position value held in the base asset.
    pub fn base_share(&self, current_price: Price) -> Result<Percentage, MathError> {
        // Price is base per quote, so quote converts to base by multiplying.
        let total = self
            .quote_amount
            .checked_mul(current_price.value)
            .and_then(|quote_in_base| self.base_amount.checked_add(quote_in_base))
            .ok_or(MathError::Overflow("position value"))?;
        if total.is_zero() {
            return Ok(Percentage::new(Decimal::ZERO));
        }
        self.base_amount
            .checked_div(total)
            .map(Percentage::new)
            .ok_or(MathError::Overflow("base share"))
    }

    /// Starts a withdrawal form for this position.
    pub fn remove_liquidity(&self) -> RemoveLiquidityConfig {
        RemoveLiquidityConfig::new(self.base_amount, self.quote_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn position(passive: bool) -> PositionOverview {
        PositionOverview::new(
            PriceRange::try_new(dec!(100), dec!(200)).unwrap(),
            dec!(10),
            dec!(0.1),
            passive,
        )
    }

    #[test]
    fn test_status() {
        let p = position(false);
        assert_eq!(p.status(Price::new(dec!(150))), RangeStatus::InRange);
        assert_eq!(p.status(Price::new(dec!(50))), RangeStatus::OutOfRange);
        assert_eq!(p.status(Price::new(dec!(250))), RangeStatus::OutOfRange);
        assert_eq!(
            position(true).status(Price::new(dec!(50))),
            RangeStatus::FullRange
        );
    }

    #[test]
    fn test_display_bounds() {
        let p = position(false);
        assert_eq!(p.display_lower(2), "100.00");
        assert_eq!(p.display_upper(2), "200.00");

        let passive = position(true);
        assert_eq!(passive.display_lower(2), "0");
        assert_eq!(passive.display_upper(2), INFINITY_SYMBOL);
    }

    #[test]
    fn test_base_share() {
        // 10 base + 0.1 quote * 100 = 20 base worth; half is base.
        let p = position(false);
        assert_eq!(p.base_share(Price::new(dec!(100))).unwrap().0, dec!(0.5));

        let empty = PositionOverview::new(
            PriceRange::try_new(dec!(1), dec!(2)).unwrap(),
            Decimal::ZERO,
            Decimal::ZERO,
            false,
        );
        assert!(empty.base_share(Price::new(dec!(1))).unwrap().is_zero());
    }

    #[test]
    fn test_base_share_overflow_is_an_error() {
        let huge = PositionOverview::new(
            PriceRange::try_new(dec!(1), dec!(20)).unwrap(),
            dec!(1),
            Decimal::MAX,
            false,
        );
        assert_eq!(
            huge.base_share(Price::new(dec!(10))),
            Err(MathError::Overflow("position value"))
        );
    }

    #[test]
    fn test_remove_liquidity_form() {
        let mut form = position(false).remove_liquidity();
        form.set_slider(100);
        assert_eq!(form.base_to_remove(), dec!(10));
        assert_eq!(form.quote_to_remove(), dec!(0.1));
    }
}
