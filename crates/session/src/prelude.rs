//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use clmm_range_session::prelude::*;
//! ```

// Anchor
pub use crate::anchor::Anchor;

// Config
pub use crate::config::{ConfigError, PresetBand, SessionConfig};

// Debounce
pub use crate::debounce::{Debouncer, spawn_debounced};

// Deposits
pub use crate::deposit_balancer::{
    ConcentratedDepositMath, DepositBalancer, DepositMath, DepositPair, DepositRejection,
    DepositUpdate, PricingContext, SideLocks,
};

// Market
pub use crate::market::{MarketSnapshot, QueryState};

// Position
pub use crate::position::PositionOverview;

// Presets
pub use crate::presets::{BandPresets, PresetProvider, PresetRange, classify};

// Range
pub use crate::range_selector::{RangeRejection, RangeSelector, RangeUpdate};

// Remove
pub use crate::remove::{PRESET_PERCENTAGES, RemoveLiquidityConfig, RemoveLiquidityError};

// Session
pub use crate::session::{AddLiquiditySession, SessionView};

// Domain
pub use clmm_range_domain::enums::{DepositSide, RangeStatus, VolatilityPreset};
pub use clmm_range_domain::value_objects::{Percentage, Price, PriceRange, TickRange};
