use crate::error::MathError;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Lowest usable tick.
pub const MIN_TICK: i32 = -887_272;
/// Highest usable tick.
pub const MAX_TICK: i32 = 887_272;

const TICK_BASE: f64 = 1.0001;

fn check_tick(tick: i32) -> Result<(), MathError> {
    if (MIN_TICK..=MAX_TICK).contains(&tick) {
        Ok(())
    } else {
        Err(MathError::TickOutOfBounds(tick))
    }
}

/// Returns the price corresponding to a given tick.
/// P = 1.0001 ^ tick
pub fn tick_to_price(tick: i32) -> Result<Decimal, MathError> {
    check_tick(tick)?;
    let price_f64 = TICK_BASE.powi(tick);
    Decimal::from_f64(price_f64).ok_or(MathError::Overflow("tick price"))
}

/// Returns the square root of the price at a given tick.
/// sqrt(P) = 1.0001 ^ (tick / 2)
///
/// Unlike [`tick_to_price`] this stays representable across the whole
/// usable tick range, so full-range positions go through it.
pub fn tick_to_sqrt_price(tick: i32) -> Result<Decimal, MathError> {
    check_tick(tick)?;
    let sqrt_f64 = TICK_BASE.powf(f64::from(tick) / 2.0);
    Decimal::from_f64(sqrt_f64).ok_or(MathError::Overflow("tick sqrt price"))
}

/// Returns the tick corresponding to a given price, clamped to the usable range.
/// tick = log_1.0001(P)
pub fn price_to_tick(price: Decimal) -> Result<i32, MathError> {
    if price <= Decimal::ZERO {
        return Err(MathError::NonPositivePrice);
    }
    let price_f64 = price.to_f64().ok_or(MathError::Overflow("price"))?;
    let tick = price_f64.log(TICK_BASE).round();
    Ok(tick.clamp(f64::from(MIN_TICK), f64::from(MAX_TICK)) as i32)
}

/// Rounds a tick to the nearest multiple of `spacing` that is still usable.
pub fn snap_to_spacing(tick: i32, spacing: i32) -> Result<i32, MathError> {
    if spacing <= 0 {
        return Err(MathError::InvalidTickSpacing(spacing));
    }
    let remainder = tick.rem_euclid(spacing);
    let snapped = if remainder * 2 >= spacing {
        tick - remainder + spacing
    } else {
        tick - remainder
    };
    let (min, max) = usable_bounds(spacing);
    Ok(snapped.clamp(min, max))
}

/// Lowest and highest ticks that are multiples of `spacing`.
#[must_use]
pub fn usable_bounds(spacing: i32) -> (i32, i32) {
    // Integer division truncates toward zero, which keeps both bounds inside.
    ((MIN_TICK / spacing) * spacing, (MAX_TICK / spacing) * spacing)
}
