//! Session configuration.
//!
//! Values come from defaults, optionally overridden by environment
//! variables:
//! - `CLMM_PRICE_DECIMAL`: decimals used when echoing prices
//! - `CLMM_TICK_SPACING`: tick spacing of the pool
//! - `CLMM_DEBOUNCE_MS`: quiet period for drag input
//! - `CLMM_MODERATE_BAND` / `CLMM_AGGRESSIVE_BAND`: half-width of the preset bands

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Error raised while loading or validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable could not be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Raw value.
        value: String,
    },

    /// Tick spacing was zero or negative.
    #[error("Tick spacing must be positive, got {0}")]
    InvalidTickSpacing(i32),

    /// A preset band does not bracket the current price.
    #[error("Preset band must satisfy 0 <= lower < 1 < upper, got [{lower}, {upper}]")]
    InvalidBand {
        /// Lower multiplier.
        lower: Decimal,
        /// Upper multiplier.
        upper: Decimal,
    },
}

/// Multipliers applied to the current price to build a preset range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetBand {
    /// Multiplier for the lower bound.
    pub lower_multiplier: Decimal,
    /// Multiplier for the upper bound.
    pub upper_multiplier: Decimal,
}

impl PresetBand {
    /// Band of `half_width` on each side of the price, e.g. `0.25` for [0.75p, 1.25p].
    #[must_use]
    pub fn symmetric(half_width: Decimal) -> Self {
        Self {
            lower_multiplier: Decimal::ONE - half_width,
            upper_multiplier: Decimal::ONE + half_width,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.lower_multiplier >= Decimal::ZERO
            && self.lower_multiplier < Decimal::ONE
            && self.upper_multiplier > Decimal::ONE;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidBand {
                lower: self.lower_multiplier,
                upper: self.upper_multiplier,
            })
        }
    }
}

/// Configuration of an add-liquidity session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Decimals used when echoing prices back to the inputs.
    pub price_decimal: u32,
    /// Tick spacing of the pool.
    pub tick_spacing: i32,
    /// Quiet period before a drag value is committed, in milliseconds.
    pub debounce_ms: u64,
    /// Band of the moderate preset.
    pub moderate: PresetBand,
    /// Band of the aggressive preset.
    pub aggressive: PresetBand,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            price_decimal: 4,
            tick_spacing: 10,
            debounce_ms: 500,
            moderate: PresetBand::symmetric(Decimal::new(25, 2)), // ±25%
            aggressive: PresetBand::symmetric(Decimal::new(5, 2)), // ±5%
        }
    }
}

impl SessionConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = parse(&lookup, "CLMM_PRICE_DECIMAL")? {
            config.price_decimal = v;
        }
        if let Some(v) = parse(&lookup, "CLMM_TICK_SPACING")? {
            config.tick_spacing = v;
        }
        if let Some(v) = parse(&lookup, "CLMM_DEBOUNCE_MS")? {
            config.debounce_ms = v;
        }
        if let Some(v) = parse::<Decimal, _>(&lookup, "CLMM_MODERATE_BAND")? {
            config.moderate = PresetBand::symmetric(v);
        }
        if let Some(v) = parse::<Decimal, _>(&lookup, "CLMM_AGGRESSIVE_BAND")? {
            config.aggressive = PresetBand::symmetric(v);
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks tick spacing and preset bands.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_spacing <= 0 {
            return Err(ConfigError::InvalidTickSpacing(self.tick_spacing));
        }
        self.moderate.validate()?;
        self.aggressive.validate()
    }

    /// Quiet period for drag input.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
