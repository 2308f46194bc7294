//! Liquidity formulas for a position bounded by two ticks.
//!
//! Prices are quoted as base per quote. Below the range a position holds
//! only the quote asset, above it only the base asset:
//!
//! - quote = L * (sqrt(P_b) - sqrt(P)) / (sqrt(P) * sqrt(P_b))
//! - base  = L * (sqrt(P) - sqrt(P_a))
//!
//! where P_a < P_b are the range bounds and P is clamped into [P_a, P_b].

use crate::error::MathError;
use crate::math::price_tick::tick_to_sqrt_price;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

fn mul(a: Decimal, b: Decimal) -> Result<Decimal, MathError> {
    a.checked_mul(b).ok_or(MathError::Overflow("product"))
}

fn div(a: Decimal, b: Decimal) -> Result<Decimal, MathError> {
    if b.is_zero() {
        return Err(MathError::RangeTooSmall);
    }
    a.checked_div(b).ok_or(MathError::Overflow("quotient"))
}

fn ordered(sqrt_price_a: Decimal, sqrt_price_b: Decimal) -> (Decimal, Decimal) {
    if sqrt_price_a < sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    }
}

/// Square root of a positive price.
pub fn sqrt_price(price: Decimal) -> Result<Decimal, MathError> {
    if price <= Decimal::ZERO {
        return Err(MathError::NonPositivePrice);
    }
    price.sqrt().ok_or(MathError::Overflow("sqrt price"))
}

/// Quote amount held by `liquidity` between the two sqrt prices at `sqrt_price`.
pub fn quote_amount_for_liquidity(
    liquidity: Decimal,
    sqrt_price_a: Decimal,
    sqrt_price_b: Decimal,
    sqrt_price: Decimal,
) -> Result<Decimal, MathError> {
    let (lower, upper) = ordered(sqrt_price_a, sqrt_price_b);
    let current = sqrt_price.clamp(lower, upper);
    let factor = div(upper - current, mul(current, upper)?)?;
    mul(liquidity, factor)
}

/// Base amount held by `liquidity` between the two sqrt prices at `sqrt_price`.
pub fn base_amount_for_liquidity(
    liquidity: Decimal,
    sqrt_price_a: Decimal,
    sqrt_price_b: Decimal,
    sqrt_price: Decimal,
) -> Result<Decimal, MathError> {
    let (lower, upper) = ordered(sqrt_price_a, sqrt_price_b);
    let current = sqrt_price.clamp(lower, upper);
    mul(liquidity, current - lower)
}

/// Liquidity provided by a base amount.
/// L = base / (sqrt(P) - sqrt(P_a))
pub fn liquidity_for_base(
    base_amount: Decimal,
    sqrt_price_a: Decimal,
    sqrt_price_b: Decimal,
    sqrt_price: Decimal,
) -> Result<Decimal, MathError> {
    let (lower, upper) = ordered(sqrt_price_a, sqrt_price_b);
    let current = sqrt_price.clamp(lower, upper);
    div(base_amount, current - lower)
}

/// Liquidity provided by a quote amount.
/// L = quote * sqrt(P) * sqrt(P_b) / (sqrt(P_b) - sqrt(P))
pub fn liquidity_for_quote(
    quote_amount: Decimal,
    sqrt_price_a: Decimal,
    sqrt_price_b: Decimal,
    sqrt_price: Decimal,
) -> Result<Decimal, MathError> {
    let (lower, upper) = ordered(sqrt_price_a, sqrt_price_b);
    let current = sqrt_price.clamp(lower, upper);
    div(mul(mul(quote_amount, current)?, upper)?, upper - current)
}

struct RangeSqrtPrices {
    lower: Decimal,
    upper: Decimal,
    current: Decimal,
}

impl RangeSqrtPrices {
    fn new(current_price: Decimal, lower_tick: i32, upper_tick: i32) -> Result<Self, MathError> {
        let (lower, upper) = ordered(
            tick_to_sqrt_price(lower_tick)?,
            tick_to_sqrt_price(upper_tick)?,
        );
        if lower == upper {
            return Err(MathError::RangeTooSmall);
        }
        Ok(Self {
            lower,
            upper,
            current: sqrt_price(current_price)?,
        })
    }

    /// Both assets are needed only while the price is strictly inside.
    fn is_two_sided(&self) -> bool {
        self.current > self.lower && self.current < self.upper
    }
}

/// Base amount that pairs with `quote_amount` for the given range.
///
/// Returns zero when the price is outside the range: below it the
/// position is quote only, above it the quote side cannot be deposited.
pub fn deposit_for_base(
    current_price: Decimal,
    lower_tick: i32,
    upper_tick: i32,
    quote_amount: Decimal,
) -> Result<Decimal, MathError> {
    let prices = RangeSqrtPrices::new(current_price, lower_tick, upper_tick)?;
    if !prices.is_two_sided() {
        return Ok(Decimal::ZERO);
    }
    let liquidity =
        liquidity_for_quote(quote_amount, prices.lower, prices.upper, prices.current)?;
    base_amount_for_liquidity(liquidity, prices.lower, prices.upper, prices.current)
}

/// Quote amount that pairs with `base_amount` for the given range.
///
/// Returns zero when the price is outside the range: above it the
/// position is base only, below it the base side cannot be deposited.
pub fn deposit_for_quote(
    current_price: Decimal,
    lower_tick: i32,
    upper_tick: i32,
    base_amount: Decimal,
) -> Result<Decimal, MathError> {
    let prices = RangeSqrtPrices::new(current_price, lower_tick, upper_tick)?;
    if !prices.is_two_sided() {
        return Ok(Decimal::ZERO);
    }
    let liquidity = liquidity_for_base(base_amount, prices.lower, prices.upper, prices.current)?;
    quote_amount_for_liquidity(liquidity, prices.lower, prices.upper, prices.current)
}
