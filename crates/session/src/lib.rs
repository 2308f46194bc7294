//! Editing session for adding liquidity to a concentrated liquidity pool.
//!
//! This crate provides:
//! - Range selection with volatility presets and full-range mode
//! - Deposit balancing driven by the last edited asset (the anchor)
//! - Out-of-range side locks
//! - A debouncer for drag input
//! - Remove-liquidity percentage selection and position overviews

/// Prelude module for convenient imports.
pub mod prelude;

/// Anchor tracking.
pub mod anchor;
/// Session configuration.
pub mod config;
/// Input debouncing.
pub mod debounce;
/// Deposit balancing.
pub mod deposit_balancer;
/// Market data snapshot.
pub mod market;
/// Position overview.
pub mod position;
/// Volatility presets.
pub mod presets;
/// Range selection.
pub mod range_selector;
/// Remove-liquidity configuration.
pub mod remove;
/// Add-liquidity session.
pub mod session;
