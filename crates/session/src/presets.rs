//! Volatility presets and preset classification.

use crate::config::{PresetBand, SessionConfig};
use clmm_range_domain::MathError;
use clmm_range_domain::enums::VolatilityPreset;
use clmm_range_domain::value_objects::{Price, PriceRange, TickRange};
use serde::Serialize;
use tracing::debug;

/// Precomputed range of a banded preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetRange {
    /// Ticks of the preset.
    pub tick_range: TickRange,
    /// Prices at those ticks.
    pub price_range: PriceRange,
}

/// Supplies the ranges of the moderate and aggressive presets.
pub trait PresetProvider {
    /// Range of a banded preset, `None` for other presets or before a price is known.
    fn preset(&self, preset: VolatilityPreset) -> Option<PresetRange>;

    /// Recomputes the presets for a new current price.
    fn refresh(&mut self, current_price: Price) -> Result<(), MathError>;
}

/// Presets built from multiplicative bands around the current price.
#[derive(Debug, Clone)]
pub struct BandPresets {
    tick_spacing: i32,
    moderate_band: PresetBand,
    aggressive_band: PresetBand,
    moderate: Option<PresetRange>,
    aggressive: Option<PresetRange>,
}

impl BandPresets {
    /// Creates presets with the bands of `config`. Empty until the first refresh.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            tick_spacing: config.tick_spacing,
            moderate_band: config.moderate,
            aggressive_band: config.aggressive,
            moderate: None,
            aggressive: None,
        }
    }

    fn band_range(&self, price: Price, band: PresetBand) -> Result<PresetRange, MathError> {
        let raw = PriceRange::around(price, band.lower_multiplier, band.upper_multiplier);
        let tick_range = TickRange::from_price_range(&raw, self.tick_spacing)?;
        // Bounds are read back from the snapped ticks so that typing them in
        // again lands on the same ticks.
        let price_range = tick_range.to_price_range()?;
        Ok(PresetRange {
            tick_range,
            price_range,
        })
    }
}

impl PresetProvider for BandPresets {
    fn preset(&self, preset: VolatilityPreset) -> Option<PresetRange> {
        match preset {
            VolatilityPreset::Moderate => self.moderate,
            VolatilityPreset::Aggressive => self.aggressive,
            VolatilityPreset::Custom | VolatilityPreset::Passive => None,
        }
    }

    fn refresh(&mut self, current_price: Price) -> Result<(), MathError> {
        let moderate = self.band_range(current_price, self.moderate_band)?;
        let aggressive = self.band_range(current_price, self.aggressive_band)?;

        debug!(
            price = %current_price,
            moderate = ?moderate.tick_range,
            aggressive = ?aggressive.tick_range,
            "Presets refreshed"
        );

        self.moderate = Some(moderate);
        self.aggressive = Some(aggressive);
        Ok(())
    }
}

/// Derives the active preset from the current ticks.
///
/// Full range is passive. Otherwise a preset is active when its ticks
/// equal `tick_range` exactly; custom when none does.
pub fn classify<P: PresetProvider + ?Sized>(
    tick_range: &TickRange,
    full_range: bool,
    presets: &P,
) -> VolatilityPreset {
    if full_range {
        return VolatilityPreset::Passive;
    }
    [VolatilityPreset::Moderate, VolatilityPreset::Aggressive]
        .into_iter()
        .find(|preset| {
            presets
                .preset(*preset)
                .is_some_and(|range| range.tick_range == *tick_range)
        })
        .unwrap_or(VolatilityPreset::Custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn refreshed(price: Price) -> BandPresets {
        let mut presets = BandPresets::new(&SessionConfig::default());
        presets.refresh(price).unwrap();
        presets
    }

    #[test]
    fn test_empty_before_refresh() {
        let presets = BandPresets::new(&SessionConfig::default());
        assert_eq!(presets.preset(VolatilityPreset::Moderate), None);
        assert_eq!(presets.preset(VolatilityPreset::Aggressive), None);
    }

    #[test]
    fn test_bands_bracket_price() {
        let presets = refreshed(Price::new(dec!(150)));
        let moderate = presets.preset(VolatilityPreset::Moderate).unwrap();
        let aggressive = presets.preset(VolatilityPreset::Aggressive).unwrap();

        // Moderate ~[112.5, 187.5], aggressive ~[142.5, 157.5]
        assert!(moderate.price_range.contains(Price::new(dec!(150))));
        assert!(aggressive.price_range.contains(Price::new(dec!(150))));
        assert!(moderate.tick_range.lower_tick < aggressive.tick_range.lower_tick);
        assert!(moderate.tick_range.upper_tick > aggressive.tick_range.upper_tick);
        assert_eq!(moderate.tick_range.lower_tick % 10, 0);
        assert_eq!(aggressive.tick_range.upper_tick % 10, 0);
    }

    #[test]
    fn test_no_preset_for_custom_or_passive() {
        let presets = refreshed(Price::new(dec!(150)));
        assert_eq!(presets.preset(VolatilityPreset::Custom), None);
        assert_eq!(presets.preset(VolatilityPreset::Passive), None);
    }

    #[test]
    fn test_classify() {
        let presets = refreshed(Price::new(dec!(150)));
        let aggressive = presets.preset(VolatilityPreset::Aggressive).unwrap();
        let moderate = presets.preset(VolatilityPreset::Moderate).unwrap();

        assert_eq!(
            classify(&aggressive.tick_range, false, &presets),
            VolatilityPreset::Aggressive
        );
        assert_eq!(
            classify(&moderate.tick_range, false, &presets),
            VolatilityPreset::Moderate
        );
        assert_eq!(
            classify(&moderate.tick_range, true, &presets),
            VolatilityPreset::Passive
        );
        assert_eq!(
            classify(&TickRange::new(0, 10), false, &presets),
            VolatilityPreset::Custom
        );
    }
}
