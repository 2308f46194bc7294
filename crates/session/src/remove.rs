//! Remove-liquidity percentage selection.

use clmm_range_domain::value_objects::Percentage;
use rust_decimal::Decimal;
use tracing::debug;

/// Whole-percent values offered as quick-select buttons.
pub const PRESET_PERCENTAGES: [u32; 4] = [25, 50, 75, 100];

/// Why a withdrawal cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RemoveLiquidityError {
    /// Nothing selected.
    #[error("Select an amount to remove")]
    ZeroPercentage,
    /// The position holds no assets.
    #[error("Position has no liquidity to remove")]
    EmptyPosition,
}

/// Share of a position to withdraw.
#[derive(Debug, Clone)]
pub struct RemoveLiquidityConfig {
    base_amount: Decimal,
    quote_amount: Decimal,
    percentage: Percentage,
}

impl RemoveLiquidityConfig {
    /// Starts at 50% of a position holding the given amounts.
    #[must_use]
    pub fn new(base_amount: Decimal, quote_amount: Decimal) -> Self {
        Self {
            base_amount,
            quote_amount,
            percentage: Percentage::from_whole_percent(50),
        }
    }

    pub fn set_percentage(&mut self, percentage: Percentage) {
        debug!(percentage = %percentage.0, "Removal percentage set");
        self.percentage = percentage;
    }

    /// Applies a slider value in whole percent.
    pub fn set_slider(&mut self, percent: u32) {
        self.set_percentage(Percentage::from_whole_percent(percent));
    }

    /// Slider position in whole percent.
    pub fn slider_value(&self) -> u32 {
        self.percentage.to_whole_percent()
    }

    /// Base amount that will be withdrawn.
    pub fn base_to_remove(&self) -> Decimal {
        self.percentage.of(self.base_amount)
    }

    /// Quote amount that will be withdrawn.
    pub fn quote_to_remove(&self) -> Decimal {
        self.percentage.of(self.quote_amount)
    }

    /// Validation state of the form.
    pub fn error(&self) -> Option<RemoveLiquidityError> {
        if self.base_amount.is_zero() && self.quote_amount.is_zero() {
            Some(RemoveLiquidityError::EmptyPosition)
        } else if self.percentage.is_zero() {
            Some(RemoveLiquidityError::ZeroPercentage)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_presets_scale_amounts() {
        let mut config = RemoveLiquidityConfig::new(dec!(10), dec!(0.4));
        assert_eq!(config.slider_value(), 50);

        for percent in PRESET_PERCENTAGES {
            config.set_slider(percent);
            assert_eq!(config.slider_value(), percent);
        }
        assert_eq!(config.base_to_remove(), dec!(10));

        config.set_slider(25);
        assert_eq!(config.base_to_remove(), dec!(2.5));
        assert_eq!(config.quote_to_remove(), dec!(0.1));
        assert_eq!(config.error(), None);
    }

    #[test]
    fn test_zero_percentage_is_an_error() {
        let mut config = RemoveLiquidityConfig::new(dec!(10), dec!(0.4));
        config.set_slider(0);
        assert_eq!(config.error(), Some(RemoveLiquidityError::ZeroPercentage));
    }

    #[test]
    fn test_empty_position_is_an_error() {
        let config = RemoveLiquidityConfig::new(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(config.error(), Some(RemoveLiquidityError::EmptyPosition));
    }
}
