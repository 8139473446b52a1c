use rust_decimal::Decimal;
use thiserror::Error;

use crate::CatalogError;

/// Errors that can occur during pricing and risk calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// Annual revenue must not be negative.
    #[error("annual revenue must not be negative, got {0}")]
    NegativeRevenue(Decimal),

    /// Downtime duration must not be negative.
    #[error("downtime hours must not be negative, got {0}")]
    NegativeHours(Decimal),

    /// The risk multiplier must be in (0, 1].
    #[error("risk multiplier must be greater than 0 and at most 1, got {0}")]
    InvalidRiskMultiplier(Decimal),

    /// Service cost must not be negative.
    #[error("service cost must not be negative, got {0}")]
    NegativeCost(Decimal),

    /// Hourly revenue rounded to zero, so break-even hours are undefined.
    #[error("hourly revenue is zero; break-even hours are undefined")]
    DivisionByZero,

    /// An intermediate value exceeded the decimal range.
    #[error("calculation overflowed for input {0}")]
    Overflow(Decimal),

    /// A tier lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
