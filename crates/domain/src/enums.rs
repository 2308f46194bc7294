use serde::{Deserialize, Serialize};
use std::fmt;

/// Range selection mode of an add-liquidity session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityPreset {
    /// Bounds entered by hand that match no preset.
    #[default]
    Custom,
    /// Full range, no effective bounds.
    Passive,
    /// Wide band around the current price.
    Moderate,
    /// Narrow band around the current price.
    Aggressive,
}

impl fmt::Display for VolatilityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Custom => "custom",
            Self::Passive => "passive",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        };
        f.write_str(name)
    }
}

/// One of the two pooled assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepositSide {
    /// Base asset.
    Base,
    /// Quote asset.
    Quote,
}

impl DepositSide {
    /// The other asset of the pair.
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            Self::Base => Self::Quote,
            Self::Quote => Self::Base,
        }
    }
}

impl fmt::Display for DepositSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Quote => f.write_str("quote"),
        }
    }
}

/// Where the current price sits relative to a position's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    /// Price inside the bounds; the position earns fees.
    InRange,
    /// Price outside the bounds.
    OutOfRange,
    /// Position spans the whole tick range.
    FullRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_side() {
        assert_eq!(DepositSide::Base.opposite(), DepositSide::Quote);
        assert_eq!(DepositSide::Quote.opposite(), DepositSide::Base);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(VolatilityPreset::default(), VolatilityPreset::Custom);
        assert_eq!(VolatilityPreset::Aggressive.to_string(), "aggressive");
    }
}
