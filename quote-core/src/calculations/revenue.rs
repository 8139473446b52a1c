//! Revenue derivation: annual revenue spread over days and hours.
//!
//! Inputs are annual revenue in wan. Daily and hourly figures in wan are
//! what quotes display; the hourly figure in raw currency feeds the
//! break-even calculation.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::{daily_revenue, hourly_revenue, hourly_revenue_currency};
//!
//! // NT$15億 = 150,000 wan
//! assert_eq!(daily_revenue(dec!(150000)).unwrap(), dec!(411));
//! assert_eq!(hourly_revenue(dec!(150000)).unwrap(), dec!(17.1));
//! assert_eq!(hourly_revenue_currency(dec!(150000)).unwrap(), dec!(171233));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{DAYS_PER_YEAR, HOURS_PER_DAY, WAN, round_one_dp, round_whole, wan_to_currency};
use super::error::CalculationError;

fn ensure_non_negative(annual_revenue_wan: Decimal) -> Result<(), CalculationError> {
    if annual_revenue_wan < Decimal::ZERO {
        return Err(CalculationError::NegativeRevenue(annual_revenue_wan));
    }
    Ok(())
}

/// Daily revenue in wan, rounded to a whole number.
///
/// Computed as `round(annual * 10000 / 365 / 10000)`.
///
/// # Errors
///
/// * [`CalculationError::NegativeRevenue`] if the input is negative.
/// * [`CalculationError::Overflow`] if the currency conversion overflows.
pub fn daily_revenue(annual_revenue_wan: Decimal) -> Result<Decimal, CalculationError> {
    ensure_non_negative(annual_revenue_wan)?;
    let annual_currency = wan_to_currency(annual_revenue_wan)
        .ok_or(CalculationError::Overflow(annual_revenue_wan))?;
    Ok(round_whole(annual_currency / DAYS_PER_YEAR / WAN))
}

/// Hourly revenue in wan, rounded to one decimal place.
///
/// Computed as `round1(annual / 365 / 24)`.
///
/// # Errors
///
/// Returns [`CalculationError::NegativeRevenue`] if the input is negative.
pub fn hourly_revenue(annual_revenue_wan: Decimal) -> Result<Decimal, CalculationError> {
    ensure_non_negative(annual_revenue_wan)?;
    Ok(round_one_dp(annual_revenue_wan / DAYS_PER_YEAR / HOURS_PER_DAY))
}

/// Hourly revenue in raw currency units, rounded to a whole number.
///
/// Computed as `round(annual * 10000 / 365 / 24)`.
///
/// # Errors
///
/// * [`CalculationError::NegativeRevenue`] if the input is negative.
/// * [`CalculationError::Overflow`] if the currency conversion overflows.
pub fn hourly_revenue_currency(annual_revenue_wan: Decimal) -> Result<Decimal, CalculationError> {
    ensure_non_negative(annual_revenue_wan)?;
    let annual_currency = wan_to_currency(annual_revenue_wan)
        .ok_or(CalculationError::Overflow(annual_revenue_wan))?;
    Ok(round_whole(annual_currency / DAYS_PER_YEAR / HOURS_PER_DAY))
}

/// Every revenue figure a quote shows, derived from one annual figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    /// Annual revenue in wan, as entered.
    pub annual_wan: Decimal,
    /// Annual revenue in 億 (100,000,000 currency units), one decimal place.
    pub annual_yi: Decimal,
    /// Annual revenue in raw currency.
    pub annual_currency: Decimal,
    /// Daily revenue in wan.
    pub daily_wan: Decimal,
    /// Hourly revenue in wan, one decimal place.
    pub hourly_wan: Decimal,
    /// Hourly revenue in raw currency.
    pub hourly_currency: Decimal,
}

impl RevenueBreakdown {
    /// Derives all figures from `annual_revenue_wan`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the individual derivations.
    pub fn derive(annual_revenue_wan: Decimal) -> Result<Self, CalculationError> {
        Ok(Self {
            annual_wan: annual_revenue_wan,
            annual_yi: round_one_dp(annual_revenue_wan / WAN),
            annual_currency: wan_to_currency(annual_revenue_wan)
                .ok_or(CalculationError::Overflow(annual_revenue_wan))?,
            daily_wan: daily_revenue(annual_revenue_wan)?,
            hourly_wan: hourly_revenue(annual_revenue_wan)?,
            hourly_currency: hourly_revenue_currency(annual_revenue_wan)?,
        })
    }
}
