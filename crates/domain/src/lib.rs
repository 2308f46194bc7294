//! Domain types and math for concentrated liquidity range selection.
//!
//! This crate provides:
//! - Price, price range, tick range and percentage value objects
//! - Price/tick conversions snapped to a tick spacing
//! - Deposit math pairing one asset amount with the other for a range

/// Shared enums.
pub mod enums;
/// Math errors.
pub mod error;
/// Tick and liquidity math.
pub mod math;
/// Value objects.
pub mod value_objects;

pub use error::MathError;
