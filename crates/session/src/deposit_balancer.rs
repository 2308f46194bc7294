//! Deposit balancing.
//!
//! The user enters an amount for one asset (the anchor); the other amount
//! is derived so the pair matches the selected range at the current price.
//! When the range changes the derived side is recomputed from the anchor,
//! never the other way round.

use crate::anchor::Anchor;
use clmm_range_domain::MathError;
use clmm_range_domain::enums::DepositSide;
use clmm_range_domain::math::concentrated_liquidity;
use clmm_range_domain::value_objects::{Price, TickRange};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Computes one side of a deposit from the other.
pub trait DepositMath {
    /// Base amount pairing with `quote_amount`.
    fn deposit_for_base(
        &self,
        current_price: Decimal,
        lower_tick: i32,
        upper_tick: i32,
        quote_amount: Decimal,
    ) -> Result<Decimal, MathError>;

    /// Quote amount pairing with `base_amount`.
    fn deposit_for_quote(
        &self,
        current_price: Decimal,
        lower_tick: i32,
        upper_tick: i32,
        base_amount: Decimal,
    ) -> Result<Decimal, MathError>;
}

/// Deposit math from the concentrated liquidity formulas.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcentratedDepositMath;

impl DepositMath for ConcentratedDepositMath {
    fn deposit_for_base(
        &self,
        current_price: Decimal,
        lower_tick: i32,
        upper_tick: i32,
        quote_amount: Decimal,
    ) -> Result<Decimal, MathError> {
        concentrated_liquidity::deposit_for_base(current_price, lower_tick, upper_tick, quote_amount)
    }

    fn deposit_for_quote(
        &self,
        current_price: Decimal,
        lower_tick: i32,
        upper_tick: i32,
        base_amount: Decimal,
    ) -> Result<Decimal, MathError> {
        concentrated_liquidity::deposit_for_quote(current_price, lower_tick, upper_tick, base_amount)
    }
}

/// Amounts of both assets and the side the user entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositPair {
    /// Base amount.
    pub base_amount: Decimal,
    /// Quote amount.
    pub quote_amount: Decimal,
    /// Side entered by the user.
    pub anchor: Anchor,
}

impl DepositPair {
    /// Amount of one side.
    #[must_use]
    pub fn amount(&self, side: DepositSide) -> Decimal {
        match side {
            DepositSide::Base => self.base_amount,
            DepositSide::Quote => self.quote_amount,
        }
    }

    fn set_amount(&mut self, side: DepositSide, amount: Decimal) {
        match side {
            DepositSide::Base => self.base_amount = amount,
            DepositSide::Quote => self.quote_amount = amount,
        }
    }
}

/// Which deposit inputs are locked because the price is outside the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideLocks {
    /// Base input locked: price below the range, position is quote only.
    pub base: bool,
    /// Quote input locked: price above the range, position is base only.
    pub quote: bool,
}

impl SideLocks {
    /// Locks for the ticks in effect at the current price. Full range never locks.
    ///
    /// Bounds are the prices at the snapped ticks, not the typed ones.
    pub fn compute(current_price: Price, ticks: &TickRange) -> Result<Self, MathError> {
        if ticks.is_full() {
            return Ok(Self::default());
        }
        let locks = match ticks.locate_price(current_price.value)? {
            Ordering::Less => Self {
                base: true,
                quote: false,
            },
            Ordering::Greater => Self {
                base: false,
                quote: true,
            },
            Ordering::Equal => Self::default(),
        };
        Ok(locks)
    }

    #[must_use]
    pub fn is_locked(&self, side: DepositSide) -> bool {
        match side {
            DepositSide::Base => self.base,
            DepositSide::Quote => self.quote,
        }
    }
}

/// Inputs of a deposit computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingContext {
    /// Current market price, if known.
    pub current_price: Option<Price>,
    /// Ticks of the selected range, if any.
    pub tick_range: Option<TickRange>,
    /// Out-of-range locks.
    pub locks: SideLocks,
}

/// Reason an amount edit was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DepositRejection {
    /// Amount was negative.
    #[error("Deposit amount must not be negative")]
    NegativeAmount,
    /// The side is locked by the out-of-range rule.
    #[error("The {0} deposit is locked while the price is out of range")]
    SideLocked(DepositSide),
}

/// Outcome of an amount edit or a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositUpdate {
    /// The derived side was recomputed.
    Derived {
        /// Side that was computed.
        side: DepositSide,
        /// New amount of that side.
        amount: Decimal,
    },
    /// No anchor yet, nothing to recompute.
    NoAnchor,
    /// Price or range unavailable, or the math failed; previous value kept.
    Stale,
    /// Edit rejected; state unchanged.
    Rejected(DepositRejection),
}

/// Keeps the two deposit amounts consistent with the anchor side.
#[derive(Debug, Clone, Default)]
pub struct DepositBalancer<M = ConcentratedDepositMath> {
    math: M,
    pair: DepositPair,
}

impl DepositBalancer<ConcentratedDepositMath> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_math(ConcentratedDepositMath)
    }
}

impl<M: DepositMath> DepositBalancer<M> {
    /// Creates a balancer with zero amounts and no anchor.
    #[must_use]
    pub fn with_math(math: M) -> Self {
        Self {
            math,
            pair: DepositPair::default(),
        }
    }

    /// Current amounts and anchor.
    pub fn pair(&self) -> DepositPair {
        self.pair
    }

    /// Records an amount typed for `side` and derives the other side.
    pub fn update_anchor_amount(
        &mut self,
        side: DepositSide,
        amount: Decimal,
        ctx: &PricingContext,
    ) -> DepositUpdate {
        if amount < Decimal::ZERO {
            debug!(side = %side, amount = %amount, "Negative deposit rejected");
            return DepositUpdate::Rejected(DepositRejection::NegativeAmount);
        }
        if ctx.locks.is_locked(side) {
            debug!(side = %side, "Locked deposit side edited");
            return DepositUpdate::Rejected(DepositRejection::SideLocked(side));
        }

        self.pair.anchor = Anchor::from(side);
        self.pair.set_amount(side, amount);
        self.derive(side, amount, ctx)
    }

    /// Re-derives the non-anchor side for a new range or price. The anchor is untouched.
    pub fn recompute(&mut self, ctx: &PricingContext) -> DepositUpdate {
        match self.pair.anchor.side() {
            Some(side) => self.derive(side, self.pair.amount(side), ctx),
            None => DepositUpdate::NoAnchor,
        }
    }

    /// Clears both amounts and the anchor.
    pub fn reset(&mut self) {
        self.pair = DepositPair::default();
    }

    fn derive(&mut self, anchor: DepositSide, amount: Decimal, ctx: &PricingContext) -> DepositUpdate {
        let (Some(price), Some(ticks)) = (ctx.current_price, ctx.tick_range) else {
            debug!(anchor = %anchor, "Price or range unavailable; keeping derived amount");
            return DepositUpdate::Stale;
        };

        let derived_side = anchor.opposite();
        let result = match anchor {
            DepositSide::Base => self.math.deposit_for_quote(
                price.value,
                ticks.lower_tick,
                ticks.upper_tick,
                amount,
            ),
            DepositSide::Quote => self.math.deposit_for_base(
                price.value,
                ticks.lower_tick,
                ticks.upper_tick,
                amount,
            ),
        };

        match result {
            Ok(derived) => {
                self.pair.set_amount(derived_side, derived);
                debug!(
                    anchor = %anchor,
                    amount = %amount,
                    derived_side = %derived_side,
                    derived = %derived,
                    "Deposit balanced"
                );
                DepositUpdate::Derived {
                    side: derived_side,
                    amount: derived,
                }
            }
            Err(e) => {
                warn!(error = %e, anchor = %anchor, "Deposit math failed; keeping derived amount");
                DepositUpdate::Stale
            }
        }
    }
}
