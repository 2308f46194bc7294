//! Errors raised by the domain math.

use rust_decimal::Decimal;

/// Error returned by price, tick and deposit computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Price was zero or negative where a positive price is required.
    #[error("Price must be positive")]
    NonPositivePrice,

    /// Tick lies outside the usable tick range.
    #[error("Tick {0} is outside the usable tick range")]
    TickOutOfBounds(i32),

    /// Tick spacing was zero or negative.
    #[error("Tick spacing must be positive, got {0}")]
    InvalidTickSpacing(i32),

    /// Lower bound is not strictly below the upper bound.
    #[error("Invalid range: lower {lower} must be below upper {upper}")]
    InvalidRange {
        /// Lower bound.
        lower: Decimal,
        /// Upper bound.
        upper: Decimal,
    },

    /// Range collapses to a single sqrt price.
    #[error("Range too small")]
    RangeTooSmall,

    /// Intermediate value does not fit in a `Decimal`.
    #[error("Overflow computing {0}")]
    Overflow(&'static str),
}
