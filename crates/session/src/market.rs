//! Market data as reported by an external query collaborator.

use clmm_range_domain::value_objects::Price;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// State of an asynchronous query owned by a market-data collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    /// Request in flight.
    Fetching,
    /// Resolved value.
    Ready(T),
    /// Request failed; the message is the collaborator's.
    Failed(String),
}

/// Last known market values. Keeps stale values while a refresh is pending or failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketSnapshot {
    current_price: Option<Price>,
    fetching: bool,
}

impl MarketSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a current-price query state.
    ///
    /// Returns `true` when a new usable price was stored. Non-positive prices
    /// are ignored.
    pub fn apply(&mut self, state: QueryState<Price>) -> bool {
        match state {
            QueryState::Fetching => {
                self.fetching = true;
                false
            }
            QueryState::Failed(message) => {
                warn!(error = %message, "Current price query failed; keeping last value");
                self.fetching = false;
                false
            }
            QueryState::Ready(price) => {
                self.fetching = false;
                if price.value <= Decimal::ZERO {
                    debug!(price = %price, "Ignoring non-positive current price");
                    return false;
                }
                let changed = self.current_price != Some(price);
                self.current_price = Some(price);
                changed
            }
        }
    }

    pub fn current_price(&self) -> Option<Price> {
        self.current_price
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }
}
