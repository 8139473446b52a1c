//! Break-even analysis: how many hours of avoided downtime pay for a service.

use rust_decimal::Decimal;

use super::common::round_one_dp;
use super::error::CalculationError;
use super::revenue::hourly_revenue_currency;

/// Hours of downtime whose lost revenue equals `service_cost`, one decimal place.
///
/// `service_cost` is in raw currency; `annual_revenue_wan` is in wan. The
/// revenue is first converted to a whole-currency hourly figure.
///
/// # Errors
///
/// * [`CalculationError::NegativeCost`] if `service_cost` is negative.
/// * [`CalculationError::NegativeRevenue`] if revenue is negative.
/// * [`CalculationError::DivisionByZero`] if the hourly revenue rounds to zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::{CalculationError, break_even_hours};
///
/// // 958,000 / 171,233 per hour
/// assert_eq!(break_even_hours(dec!(958000), dec!(150000)), Ok(dec!(5.6)));
/// assert_eq!(
///     break_even_hours(dec!(958000), dec!(0)),
///     Err(CalculationError::DivisionByZero)
/// );
/// ```
pub fn break_even_hours(
    service_cost: Decimal,
    annual_revenue_wan: Decimal,
) -> Result<Decimal, CalculationError> {
    if service_cost < Decimal::ZERO {
        return Err(CalculationError::NegativeCost(service_cost));
    }

    let hourly = hourly_revenue_currency(annual_revenue_wan)?;
    if hourly.is_zero() {
        return Err(CalculationError::DivisionByZero);
    }

    Ok(round_one_dp(service_cost / hourly))
}
