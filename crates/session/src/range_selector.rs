//! Price range selection.
//!
//! Holds the lower/upper bounds of the position being built, the
//! full-range flag set by the passive preset, and the text echoed back to
//! the two price inputs. Invalid edits are rejected and leave the previous
//! range in place.

use crate::presets::{PresetProvider, PresetRange, classify};
use clmm_range_domain::MathError;
use clmm_range_domain::enums::VolatilityPreset;
use clmm_range_domain::value_objects::{Price, PriceRange, TickRange};
use rust_decimal::Decimal;
use tracing::debug;

/// Displayed in place of the upper bound in full range.
pub const INFINITY_SYMBOL: &str = "∞";

/// Reason a range edit was not applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeRejection {
    /// A bound was negative.
    #[error("Price bounds must not be negative")]
    NegativeBound,
    /// Lower bound not strictly below upper bound.
    #[error("Lower bound must be below upper bound")]
    OutOfOrder,
    /// A single bound was edited before any range existed.
    #[error("No range selected yet")]
    NotInitialized,
    /// Custom is derived, not selected.
    #[error("Custom range cannot be selected directly")]
    CustomNotSelectable,
    /// Preset band not computed yet (no current price).
    #[error("Preset {0} is not available yet")]
    PresetUnavailable(VolatilityPreset),
    /// Bounds could not be mapped onto ticks.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Outcome of a range edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeUpdate {
    /// The edit was applied; carries the new ticks.
    Applied(TickRange),
    /// The edit was rejected; the previous range is kept.
    Rejected(RangeRejection),
}

impl RangeUpdate {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Lower/upper bound pair with preset and full-range handling.
#[derive(Debug, Clone)]
pub struct RangeSelector {
    range: Option<PriceRange>,
    tick_range: Option<TickRange>,
    full_range: bool,
    tick_spacing: i32,
    price_decimal: u32,
    input_min: String,
    input_max: String,
}

impl RangeSelector {
    /// Creates an empty selector.
    #[must_use]
    pub fn new(tick_spacing: i32, price_decimal: u32) -> Self {
        Self {
            range: None,
            tick_range: None,
            full_range: false,
            tick_spacing,
            price_decimal,
            input_min: String::new(),
            input_max: String::new(),
        }
    }

    /// Whether a range has been set.
    pub fn is_initialized(&self) -> bool {
        self.range.is_some()
    }

    /// Seeds the range with a preset's bounds.
    pub fn initialize(&mut self, preset: &PresetRange) {
        self.apply(preset.price_range, preset.tick_range);
    }

    /// Sets both bounds. Requires `0 <= lower < upper`.
    pub fn set_range(&mut self, lower: Decimal, upper: Decimal) -> RangeUpdate {
        if lower < Decimal::ZERO || upper < Decimal::ZERO {
            return self.reject(RangeRejection::NegativeBound);
        }
        if lower >= upper {
            return self.reject(RangeRejection::OutOfOrder);
        }
        let range = PriceRange::new(Price::new(lower), Price::new(upper));
        match TickRange::from_price_range(&range, self.tick_spacing) {
            Ok(ticks) => {
                self.apply(range, ticks);
                RangeUpdate::Applied(ticks)
            }
            Err(e) => self.reject(e.into()),
        }
    }

    /// Sets the lower bound, keeping the upper one.
    pub fn set_lower(&mut self, lower: Decimal) -> RangeUpdate {
        match self.range {
            Some(range) => self.set_range(lower, range.upper_price.value),
            None => self.reject(RangeRejection::NotInitialized),
        }
    }

    /// Sets the upper bound, keeping the lower one.
    pub fn set_upper(&mut self, upper: Decimal) -> RangeUpdate {
        match self.range {
            Some(range) => self.set_range(range.lower_price.value, upper),
            None => self.reject(RangeRejection::NotInitialized),
        }
    }

    /// Selects a preset. Passive switches to full range; moderate and
    /// aggressive copy the preset's bounds.
    pub fn select_preset<P: PresetProvider + ?Sized>(
        &mut self,
        preset: VolatilityPreset,
        presets: &P,
    ) -> RangeUpdate {
        match preset {
            VolatilityPreset::Custom => self.reject(RangeRejection::CustomNotSelectable),
            VolatilityPreset::Passive => {
                self.full_range = true;
                debug!("Full range selected");
                RangeUpdate::Applied(TickRange::full())
            }
            VolatilityPreset::Moderate | VolatilityPreset::Aggressive => {
                match presets.preset(preset) {
                    Some(range) => {
                        self.apply(range.price_range, range.tick_range);
                        debug!(preset = %preset, ticks = ?range.tick_range, "Preset selected");
                        RangeUpdate::Applied(range.tick_range)
                    }
                    None => self.reject(RangeRejection::PresetUnavailable(preset)),
                }
            }
        }
    }

    fn apply(&mut self, range: PriceRange, ticks: TickRange) {
        self.full_range = false;
        self.input_min = range.lower_price.to_fixed(self.price_decimal);
        self.input_max = range.upper_price.to_fixed(self.price_decimal);
        self.range = Some(range);
        self.tick_range = Some(ticks);
    }

    fn reject(&self, reason: RangeRejection) -> RangeUpdate {
        debug!(reason = %reason, "Range edit rejected");
        RangeUpdate::Rejected(reason)
    }

    /// Ticks in effect: the whole tick range in full range.
    pub fn tick_range(&self) -> Option<TickRange> {
        if self.full_range {
            Some(TickRange::full())
        } else {
            self.tick_range
        }
    }

    pub fn is_full_range(&self) -> bool {
        self.full_range
    }

    /// Preset matching the current ticks.
    pub fn active_preset<P: PresetProvider + ?Sized>(&self, presets: &P) -> VolatilityPreset {
        match self.tick_range() {
            Some(ticks) => classify(&ticks, self.full_range, presets),
            None => VolatilityPreset::Custom,
        }
    }

    pub fn is_range_moderate<P: PresetProvider + ?Sized>(&self, presets: &P) -> bool {
        self.active_preset(presets) == VolatilityPreset::Moderate
    }

    pub fn is_range_aggressive<P: PresetProvider + ?Sized>(&self, presets: &P) -> bool {
        self.active_preset(presets) == VolatilityPreset::Aggressive
    }

    /// Text for the lower input: `0` in full range.
    pub fn display_min(&self) -> String {
        if self.full_range {
            "0".to_string()
        } else {
            self.input_min.clone()
        }
    }

    /// Text for the upper input: `∞` in full range.
    pub fn display_max(&self) -> String {
        if self.full_range {
            INFINITY_SYMBOL.to_string()
        } else {
            self.input_max.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::presets::BandPresets;
    use rust_decimal_macros::dec;

    fn presets_at(price: Decimal) -> BandPresets {
        let mut presets = BandPresets::new(&SessionConfig::default());
        presets.refresh(Price::new(price)).unwrap();
        presets
    }

    #[test]
    fn test_set_range_applies_and_echoes() {
        let mut selector = RangeSelector::new(10, 2);
        let update = selector.set_range(dec!(100.123456), dec!(200));
        assert!(update.is_applied());
        assert_eq!(selector.display_min(), "100.12");
        assert_eq!(selector.display_max(), "200.00");
        // Stored value keeps full precision.
        assert_eq!(
            selector.range.unwrap().lower_price.value,
            dec!(100.123456)
        );
    }

    #[test]
    fn test_out_of_order_keeps_previous_range() {
        let mut selector = RangeSelector::new(10, 4);
        selector.set_range(dec!(100), dec!(200));
        let before = selector.tick_range();

        assert_eq!(
            selector.set_range(dec!(200), dec!(100)),
            RangeUpdate::Rejected(RangeRejection::OutOfOrder)
        );
        assert_eq!(
            selector.set_range(dec!(-1), dec!(100)),
            RangeUpdate::Rejected(RangeRejection::NegativeBound)
        );
        assert_eq!(
            selector.set_upper(dec!(50)),
            RangeUpdate::Rejected(RangeRejection::OutOfOrder)
        );
        assert_eq!(selector.tick_range(), before);
        assert_eq!(selector.display_min(), "100.0000");
    }

    #[test]
    fn test_single_bound_edits() {
        let mut selector = RangeSelector::new(10, 4);
        assert_eq!(
            selector.set_lower(dec!(1)),
            RangeUpdate::Rejected(RangeRejection::NotInitialized)
        );

        selector.set_range(dec!(100), dec!(200));
        assert!(selector.set_lower(dec!(120)).is_applied());
        assert!(selector.set_upper(dec!(220)).is_applied());
        let range = selector.range.unwrap();
        assert_eq!(range.lower_price.value, dec!(120));
        assert_eq!(range.upper_price.value, dec!(220));
    }

    #[test]
    fn test_zero_lower_bound_allowed() {
        let mut selector = RangeSelector::new(10, 4);
        assert!(selector.set_range(dec!(0), dec!(200)).is_applied());
        assert!(!selector.is_full_range());
    }

    #[test]
    fn test_select_aggressive_then_matching_bounds() {
        let presets = presets_at(dec!(150));
        let aggressive = presets.preset(VolatilityPreset::Aggressive).unwrap();
        let mut selector = RangeSelector::new(10, 4);

        selector.select_preset(VolatilityPreset::Aggressive, &presets);
        assert_eq!(
            selector.active_preset(&presets),
            VolatilityPreset::Aggressive
        );

        selector.set_range(dec!(100), dec!(200));
        assert_eq!(selector.active_preset(&presets), VolatilityPreset::Custom);

        selector.set_range(
            aggressive.price_range.lower_price.value,
            aggressive.price_range.upper_price.value,
        );
        assert_eq!(
            selector.active_preset(&presets),
            VolatilityPreset::Aggressive
        );
        assert!(selector.is_range_aggressive(&presets));
        assert!(!selector.is_range_moderate(&presets));
    }

    #[test]
    fn test_passive_full_range() {
        let presets = presets_at(dec!(150));
        let mut selector = RangeSelector::new(10, 4);
        selector.select_preset(VolatilityPreset::Moderate, &presets);

        let update = selector.select_preset(VolatilityPreset::Passive, &presets);
        assert_eq!(update, RangeUpdate::Applied(TickRange::full()));
        assert!(selector.is_full_range());
        assert_eq!(selector.display_min(), "0");
        assert_eq!(selector.display_max(), INFINITY_SYMBOL);
        assert_eq!(selector.active_preset(&presets), VolatilityPreset::Passive);
        assert!(!selector.is_range_moderate(&presets));
        assert!(!selector.is_range_aggressive(&presets));

        // Editing a bound leaves full range and reuses the stored bound.
        assert!(selector.set_lower(dec!(120)).is_applied());
        assert!(!selector.is_full_range());
    }

    #[test]
    fn test_custom_and_unavailable_presets_rejected() {
        let empty = BandPresets::new(&SessionConfig::default());
        let mut selector = RangeSelector::new(10, 4);
        assert_eq!(
            selector.select_preset(VolatilityPreset::Custom, &empty),
            RangeUpdate::Rejected(RangeRejection::CustomNotSelectable)
        );
        assert_eq!(
            selector.select_preset(VolatilityPreset::Moderate, &empty),
            RangeUpdate::Rejected(RangeRejection::PresetUnavailable(
                VolatilityPreset::Moderate
            ))
        );
        assert!(!selector.is_initialized());
        assert_eq!(selector.active_preset(&empty), VolatilityPreset::Custom);
    }
}
