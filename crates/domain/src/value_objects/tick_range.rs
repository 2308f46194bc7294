use crate::error::MathError;
use crate::math::concentrated_liquidity::sqrt_price;
use crate::math::price_tick::{
    MAX_TICK, MIN_TICK, price_to_tick, snap_to_spacing, tick_to_price, tick_to_sqrt_price,
};
use crate::value_objects::price::Price;
use crate::value_objects::price_range::PriceRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Tick representation of a price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickRange {
    pub lower_tick: i32,
    pub upper_tick: i32,
}

impl TickRange {
    pub fn new(lower_tick: i32, upper_tick: i32) -> Self {
        Self {
            lower_tick,
            upper_tick,
        }
    }

    /// The whole usable tick range.
    pub fn full() -> Self {
        Self::new(MIN_TICK, MAX_TICK)
    }

    pub fn is_full(&self) -> bool {
        self.lower_tick == MIN_TICK && self.upper_tick == MAX_TICK
    }

    /// Maps a price range onto ticks snapped to `spacing`.
    ///
    /// A zero lower bound maps to the lowest usable tick. Bounds that snap
    /// onto the same tick are pushed one spacing apart.
    pub fn from_price_range(range: &PriceRange, spacing: i32) -> Result<Self, MathError> {
        let lower_raw = if range.lower_price.value.is_zero() {
            MIN_TICK
        } else {
            price_to_tick(range.lower_price.value)?
        };
        let upper_raw = price_to_tick(range.upper_price.value)?;

        let lower = snap_to_spacing(lower_raw, spacing)?;
        let mut upper = snap_to_spacing(upper_raw, spacing)?;
        if upper <= lower {
            upper = lower + spacing;
        }
        if upper > MAX_TICK {
            return Err(MathError::TickOutOfBounds(upper));
        }
        Ok(Self::new(lower, upper))
    }

    /// Prices at both ticks.
    pub fn to_price_range(&self) -> Result<PriceRange, MathError> {
        Ok(PriceRange::new(
            Price::new(tick_to_price(self.lower_tick)?),
            Price::new(tick_to_price(self.upper_tick)?),
        ))
    }

    /// Where `price` sits against the bounds: `Less` strictly below the
    /// lower tick, `Greater` strictly above the upper tick.
    ///
    /// Compares square roots at the ticks, the same values the deposit
    /// formulas use, so a price reported inside is one they treat as inside.
    pub fn locate_price(&self, price: Decimal) -> Result<Ordering, MathError> {
        let current = sqrt_price(price)?;
        if current < tick_to_sqrt_price(self.lower_tick)? {
            Ok(Ordering::Less)
        } else if current > tick_to_sqrt_price(self.upper_tick)? {
            Ok(Ordering::Greater)
        } else {
            Ok(Ordering::Equal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_price_range_snaps() {
        let range = PriceRange::try_new(dec!(100), dec!(200)).unwrap();
        let ticks = TickRange::from_price_range(&range, 10).unwrap();
        // log_1.0001(100) ~= 46054, log_1.0001(200) ~= 52986
        assert_eq!(ticks, TickRange::new(46_050, 52_990));
    }

    #[test]
    fn test_from_price_range_is_monotonic() {
        let a = PriceRange::try_new(dec!(100), dec!(200)).unwrap();
        let b = PriceRange::try_new(dec!(120), dec!(220)).unwrap();
        let ta = TickRange::from_price_range(&a, 10).unwrap();
        let tb = TickRange::from_price_range(&b, 10).unwrap();
        assert!(tb.lower_tick > ta.lower_tick);
        assert!(tb.upper_tick > ta.upper_tick);
    }

    #[test]
    fn test_zero_lower_maps_to_min_tick() {
        let range = PriceRange::try_new(dec!(0), dec!(1)).unwrap();
        let ticks = TickRange::from_price_range(&range, 10).unwrap();
        assert_eq!(ticks.lower_tick, -887_270);
        assert_eq!(ticks.upper_tick, 0);
    }

    #[test]
    fn test_narrow_range_keeps_one_spacing() {
        let range = PriceRange::try_new(dec!(100), dec!(100.0001)).unwrap();
        let ticks = TickRange::from_price_range(&range, 10).unwrap();
        assert_eq!(ticks.upper_tick - ticks.lower_tick, 10);
    }

    #[test]
    fn test_full() {
        assert!(TickRange::full().is_full());
        assert!(!TickRange::new(-10, 10).is_full());
    }

    #[test]
    fn test_locate_price() {
        let ticks = TickRange::new(46_050, 52_990);
        assert_eq!(ticks.locate_price(dec!(150)).unwrap(), Ordering::Equal);
        assert_eq!(ticks.locate_price(dec!(50)).unwrap(), Ordering::Less);
        assert_eq!(ticks.locate_price(dec!(250)).unwrap(), Ordering::Greater);
        assert!(ticks.locate_price(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_locate_price_uses_snapped_bounds() {
        // 100.05 snaps to tick 46060, whose price is ~100.05997.
        let range = PriceRange::try_new(dec!(100.05), dec!(200)).unwrap();
        let ticks = TickRange::from_price_range(&range, 10).unwrap();
        assert_eq!(ticks.lower_tick, 46_060);
        assert!(range.contains(Price::new(dec!(100.055))));
        assert_eq!(ticks.locate_price(dec!(100.055)).unwrap(), Ordering::Less);
        assert_eq!(ticks.locate_price(dec!(100.07)).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_full_range_contains_every_price() {
        let full = TickRange::full();
        assert_eq!(full.locate_price(dec!(0.000001)).unwrap(), Ordering::Equal);
        assert_eq!(full.locate_price(dec!(1000000000)).unwrap(), Ordering::Equal);
    }
}
