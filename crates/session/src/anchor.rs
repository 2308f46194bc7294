//! Which deposit side the user edited last.

use clmm_range_domain::enums::DepositSide;
use serde::{Deserialize, Serialize};

/// Last side edited by the user. The other side is derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Nothing entered yet.
    #[default]
    None,
    /// The base amount was entered.
    Base,
    /// The quote amount was entered.
    Quote,
}

impl Anchor {
    /// Side entered by the user, if any.
    #[must_use]
    pub fn side(&self) -> Option<DepositSide> {
        match self {
            Self::None => None,
            Self::Base => Some(DepositSide::Base),
            Self::Quote => Some(DepositSide::Quote),
        }
    }
}

impl From<DepositSide> for Anchor {
    fn from(side: DepositSide) -> Self {
        match side {
            DepositSide::Base => Self::Base,
            DepositSide::Quote => Self::Quote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_anchor_is_none() {
        let anchor = Anchor::default();
        assert_eq!(anchor.side(), None);
    }

    #[test]
    fn test_anchor_from_side() {
        let anchor = Anchor::from(DepositSide::Base);
        assert_eq!(anchor.side(), Some(DepositSide::Base));
        assert_eq!(Anchor::from(DepositSide::Quote).side(), Some(DepositSide::Quote));
    }
}
