/// Liquidity and deposit amount formulas.
pub mod concentrated_liquidity;
/// Price and tick conversions.
pub mod price_tick;

pub use concentrated_liquidity::{deposit_for_base, deposit_for_quote};
pub use price_tick::{MAX_TICK, MIN_TICK, price_to_tick, snap_to_spacing, tick_to_price};
