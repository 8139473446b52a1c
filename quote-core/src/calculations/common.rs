//! Common utility functions for pricing and risk calculations.
//!
//! This module provides the rounding rules and unit conversions shared by
//! every calculation. Revenue is carried in 萬元 (wan, 10,000 currency units)
//! throughout; [`wan_to_currency`] is the only place that converts to raw
//! currency.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of raw currency units in one wan (萬元).
pub const WAN: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Days used to spread annual revenue.
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Hours used to spread daily revenue.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Rounds a decimal value to a whole number using half-up rounding.
///
/// Values at exactly .5 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(410.95)), dec!(411));
/// assert_eq!(round_whole(dec!(171232.5)), dec!(171233));
/// assert_eq!(round_whole(dec!(171232.4)), dec!(171232));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to exactly one decimal place using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_one_dp;
///
/// assert_eq!(round_one_dp(dec!(17.123)), dec!(17.1));
/// assert_eq!(round_one_dp(dec!(5.59468)), dec!(5.6));
/// assert_eq!(round_one_dp(dec!(0.05)), dec!(0.1));
/// ```
pub fn round_one_dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts an amount in wan to raw currency units.
///
/// Returns `None` if the result does not fit in a [`Decimal`].
pub fn wan_to_currency(amount_wan: Decimal) -> Option<Decimal> {
    amount_wan.checked_mul(WAN)
}
