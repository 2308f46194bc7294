//! Add-liquidity editing session.
//!
//! Owns the range selector, the deposit balancer, the presets and the last
//! known market price. Every accepted edit recomputes the derived deposit
//! and publishes a fresh [`SessionView`] on a watch channel.

use crate::anchor::Anchor;
use crate::config::SessionConfig;
use crate::deposit_balancer::{
    ConcentratedDepositMath, DepositBalancer, DepositMath, DepositPair, DepositUpdate,
    PricingContext, SideLocks,
};
use crate::market::{MarketSnapshot, QueryState};
use crate::presets::{BandPresets, PresetProvider};
use crate::range_selector::{RangeSelector, RangeUpdate};
use clmm_range_domain::enums::{DepositSide, VolatilityPreset};
use clmm_range_domain::value_objects::{Price, TickRange};
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Everything a display layer needs to render the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Last known current price.
    pub current_price: Option<Price>,
    /// Whether a price refresh is in flight.
    pub fetching: bool,
    /// Text of the lower price input.
    pub range_min: String,
    /// Text of the upper price input.
    pub range_max: String,
    /// Ticks in effect.
    pub tick_range: Option<TickRange>,
    /// Full range selected.
    pub full_range: bool,
    /// Preset matching the range.
    pub active_preset: VolatilityPreset,
    /// Base amount.
    pub base_amount: Decimal,
    /// Quote amount.
    pub quote_amount: Decimal,
    /// Side entered by the user.
    pub anchor: Anchor,
    /// Out-of-range locks.
    pub locks: SideLocks,
}

/// State of one add-liquidity flow, from mount to close.
pub struct AddLiquiditySession<M = ConcentratedDepositMath, P = BandPresets> {
    config: SessionConfig,
    selector: RangeSelector,
    balancer: DepositBalancer<M>,
    presets: P,
    market: MarketSnapshot,
    view_tx: watch::Sender<SessionView>,
}

impl AddLiquiditySession {
    /// Creates a session with the default deposit math and band presets.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let presets = BandPresets::new(&config);
        Self::with_collaborators(config, ConcentratedDepositMath, presets)
    }
}

impl<M: DepositMath, P: PresetProvider> AddLiquiditySession<M, P> {
    /// Creates a session with custom collaborators. Amounts start at zero, no anchor.
    pub fn with_collaborators(config: SessionConfig, math: M, presets: P) -> Self {
        let (view_tx, _) = watch::channel(SessionView::default());
        let session = Self {
            selector: RangeSelector::new(config.tick_spacing, config.price_decimal),
            balancer: DepositBalancer::with_math(math),
            presets,
            market: MarketSnapshot::new(),
            config,
            view_tx,
        };
        session.publish();
        session
    }

    /// Subscribes to view updates.
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view_tx.subscribe()
    }

    /// Applies a current-price query state from the market-data collaborator.
    ///
    /// The first usable price seeds the range with the moderate preset.
    /// Returns `true` when a new price was applied.
    pub fn apply_current_price(&mut self, state: QueryState<Price>) -> bool {
        if !self.market.apply(state) {
            self.publish();
            return false;
        }
        let Some(price) = self.market.current_price() else {
            return false;
        };

        if let Err(e) = self.presets.refresh(price) {
            warn!(error = %e, price = %price, "Could not compute presets");
        }

        if !self.selector.is_initialized() {
            match self.presets.preset(VolatilityPreset::Moderate) {
                Some(moderate) => {
                    self.selector.initialize(&moderate);
                    info!(
                        price = %price,
                        lower_tick = moderate.tick_range.lower_tick,
                        upper_tick = moderate.tick_range.upper_tick,
                        "Range initialized from moderate preset"
                    );
                }
                None => debug!("Moderate preset unavailable; range left empty"),
            }
        }

        self.recompute();
        true
    }

    /// Sets both bounds.
    pub fn set_range(&mut self, lower: Decimal, upper: Decimal) -> RangeUpdate {
        let update = self.selector.set_range(lower, upper);
        self.after_range_update(update)
    }

    /// Sets the lower bound.
    pub fn set_lower(&mut self, lower: Decimal) -> RangeUpdate {
        let update = self.selector.set_lower(lower);
        self.after_range_update(update)
    }

    /// Sets the upper bound.
    pub fn set_upper(&mut self, upper: Decimal) -> RangeUpdate {
        let update = self.selector.set_upper(upper);
        self.after_range_update(update)
    }

    /// Selects a volatility preset.
    pub fn select_preset(&mut self, preset: VolatilityPreset) -> RangeUpdate {
        let update = self.selector.select_preset(preset, &self.presets);
        self.after_range_update(update)
    }

    /// Records an amount entered for `side` and derives the other side.
    pub fn update_anchor_amount(&mut self, side: DepositSide, amount: Decimal) -> DepositUpdate {
        let ctx = self.context();
        let update = self.balancer.update_anchor_amount(side, amount, &ctx);
        if !matches!(update, DepositUpdate::Rejected(_)) {
            self.publish();
        }
        update
    }

    /// Clears range and deposits, as on a fresh mount. A known price re-seeds the range.
    pub fn reset(&mut self) {
        self.selector = RangeSelector::new(self.config.tick_spacing, self.config.price_decimal);
        self.balancer.reset();
        if let Some(moderate) = self.presets.preset(VolatilityPreset::Moderate) {
            self.selector.initialize(&moderate);
        }
        info!("Session reset");
        self.publish();
    }

    fn after_range_update(&mut self, update: RangeUpdate) -> RangeUpdate {
        if update.is_applied() {
            self.recompute();
        }
        update
    }

    fn recompute(&mut self) {
        let ctx = self.context();
        self.balancer.recompute(&ctx);
        self.publish();
    }

    fn context(&self) -> PricingContext {
        PricingContext {
            current_price: self.market.current_price(),
            tick_range: self.selector.tick_range(),
            locks: self.locks(),
        }
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.view());
    }

    /// Out-of-range locks at the current price, against the ticks in effect.
    pub fn locks(&self) -> SideLocks {
        let (Some(price), Some(ticks)) = (self.market.current_price(), self.selector.tick_range())
        else {
            return SideLocks::default();
        };
        SideLocks::compute(price, &ticks).unwrap_or_else(|err| {
            warn!(error = %err, "Could not place current price in range; sides left open");
            SideLocks::default()
        })
    }

    pub fn active_preset(&self) -> VolatilityPreset {
        self.selector.active_preset(&self.presets)
    }

    pub fn is_range_moderate(&self) -> bool {
        self.selector.is_range_moderate(&self.presets)
    }

    pub fn is_range_aggressive(&self) -> bool {
        self.selector.is_range_aggressive(&self.presets)
    }

    pub fn is_full_range(&self) -> bool {
        self.selector.is_full_range()
    }

    pub fn tick_range(&self) -> Option<TickRange> {
        self.selector.tick_range()
    }

    pub fn deposit(&self) -> DepositPair {
        self.balancer.pair()
    }

    /// Snapshot for the display layer.
    pub fn view(&self) -> SessionView {
        let pair = self.balancer.pair();
        SessionView {
            current_price: self.market.current_price(),
            fetching: self.market.is_fetching(),
            range_min: self.selector.display_min(),
            range_max: self.selector.display_max(),
            tick_range: self.selector.tick_range(),
            full_range: self.selector.is_full_range(),
            active_preset: self.active_preset(),
            base_amount: pair.base_amount,
            quote_amount: pair.quote_amount,
            anchor: pair.anchor,
            locks: self.locks(),
        }
    }
}
