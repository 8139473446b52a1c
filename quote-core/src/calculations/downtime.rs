//! Downtime risk: the revenue lost while a production line is stopped.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::common::round_one_dp;
use super::error::CalculationError;
use super::revenue::hourly_revenue;
use crate::ShiftPattern;

/// Outage durations, in hours, shown in the standard loss table.
pub const STANDARD_OUTAGE_HOURS: [u32; 3] = [2, 4, 8];

fn ensure_valid_multiplier(risk_multiplier: Decimal) -> Result<(), CalculationError> {
    if risk_multiplier <= Decimal::ZERO || risk_multiplier > Decimal::ONE {
        return Err(CalculationError::InvalidRiskMultiplier(risk_multiplier));
    }
    Ok(())
}

/// Estimated loss in wan for an outage of `hours`, one decimal place.
///
/// Computed as `round1(hourly_revenue(annual) * hours * risk_multiplier)`,
/// where the hourly revenue is itself already rounded to one decimal place.
///
/// # Errors
///
/// * [`CalculationError::NegativeRevenue`] if revenue is negative.
/// * [`CalculationError::NegativeHours`] if `hours` is negative.
/// * [`CalculationError::InvalidRiskMultiplier`] if the multiplier is not in (0, 1].
/// * [`CalculationError::Overflow`] if the loss exceeds the decimal range.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::downtime_risk;
///
/// // 17.1 wan/hour × 4 hours × 1.0
/// let loss = downtime_risk(dec!(150000), dec!(4), Decimal::ONE).unwrap();
/// assert_eq!(loss, dec!(68.4));
/// ```
pub fn downtime_risk(
    annual_revenue_wan: Decimal,
    hours: Decimal,
    risk_multiplier: Decimal,
) -> Result<Decimal, CalculationError> {
    if hours < Decimal::ZERO {
        return Err(CalculationError::NegativeHours(hours));
    }
    ensure_valid_multiplier(risk_multiplier)?;

    let hourly = hourly_revenue(annual_revenue_wan)?;
    if hours > Decimal::from(24 * 7) {
        warn!(
            hours = %hours,
            "Downtime longer than a week; loss estimate is a linear extrapolation"
        );
    }

    let loss = hourly
        .checked_mul(hours)
        .and_then(|loss| loss.checked_mul(risk_multiplier))
        .ok_or(CalculationError::Overflow(hours))?;
    Ok(round_one_dp(loss))
}

/// One row of the loss table: an outage duration and its cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DowntimeScenario {
    pub hours: Decimal,
    /// Loss in wan before the shift risk multiplier, one decimal place.
    pub base_loss_wan: Decimal,
    pub risk_multiplier: Decimal,
    /// Loss in wan after the shift risk multiplier, one decimal place.
    pub adjusted_loss_wan: Decimal,
}

/// Builds the loss table for each outage duration under `pattern`.
///
/// # Errors
///
/// Propagates any error from [`downtime_risk`].
pub fn downtime_scenarios(
    annual_revenue_wan: Decimal,
    pattern: &ShiftPattern,
    outage_hours: &[u32],
) -> Result<Vec<DowntimeScenario>, CalculationError> {
    outage_hours
        .iter()
        .map(|&hours| -> Result<DowntimeScenario, CalculationError> {
            let hours = Decimal::from(hours);
            Ok(DowntimeScenario {
                hours,
                base_loss_wan: downtime_risk(annual_revenue_wan, hours, Decimal::ONE)?,
                risk_multiplier: pattern.risk_multiplier,
                adjusted_loss_wan: downtime_risk(
                    annual_revenue_wan,
                    hours,
                    pattern.risk_multiplier,
                )?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // downtime_risk tests
    // =========================================================================

    #[test]
    fn downtime_risk_for_default_fixture() {
        assert_eq!(
            downtime_risk(dec!(150000), dec!(4), dec!(1.0)),
            Ok(dec!(68.4))
        );
    }

    #[test]
    fn downtime_risk_equals_rounded_product() {
        for (revenue, hours, multiplier) in [
            (dec!(150000), dec!(2), dec!(0.6)),
            (dec!(150000), dec!(8), dec!(0.9)),
            (dec!(50000), dec!(3.5), dec!(0.8)),
            (dec!(987654), dec!(1), dec!(0.75)),
        ] {
            let hourly = hourly_revenue(revenue).unwrap();
            let expected = round_one_dp(hourly * hours * multiplier);

            assert_eq!(downtime_risk(revenue, hours, multiplier), Ok(expected));
        }
    }

    #[test]
    fn downtime_risk_of_zero_hours_is_zero() {
        assert_eq!(downtime_risk(dec!(150000), dec!(0), dec!(1)), Ok(dec!(0)));
    }

    #[test]
    fn downtime_risk_rejects_negative_hours() {
        assert_eq!(
            downtime_risk(dec!(150000), dec!(-1), dec!(1)),
            Err(CalculationError::NegativeHours(dec!(-1)))
        );
    }

    #[test]
    fn downtime_risk_rejects_zero_multiplier() {
        assert_eq!(
            downtime_risk(dec!(150000), dec!(4), dec!(0)),
            Err(CalculationError::InvalidRiskMultiplier(dec!(0)))
        );
    }

    #[test]
    fn downtime_risk_rejects_multiplier_above_one() {
        assert_eq!(
            downtime_risk(dec!(150000), dec!(4), dec!(1.2)),
            Err(CalculationError::InvalidRiskMultiplier(dec!(1.2)))
        );
    }

    #[test]
    fn downtime_risk_rejects_negative_revenue() {
        assert_eq!(
            downtime_risk(dec!(-5), dec!(4), dec!(1)),
            Err(CalculationError::NegativeRevenue(dec!(-5)))
        );
    }

    #[test]
    fn downtime_risk_reports_overflow_for_unbounded_hours() {
        assert_eq!(
            downtime_risk(dec!(150000), Decimal::MAX, Decimal::ONE),
            Err(CalculationError::Overflow(Decimal::MAX))
        );
    }

    #[test]
    fn downtime_risk_extrapolates_long_outages() {
        // 17.1 × 720 h
        assert_eq!(
            downtime_risk(dec!(150000), dec!(720), Decimal::ONE),
            Ok(dec!(12312.0))
        );
    }

    // =========================================================================
    // downtime_scenarios tests
    // =========================================================================

    #[test]
    fn scenarios_apply_shift_multiplier() {
        let pattern = ShiftPattern::new("Two-shift", 12, dec!(0.8), "");

        let scenarios =
            downtime_scenarios(dec!(150000), &pattern, &STANDARD_OUTAGE_HOURS).unwrap();

        let rows: Vec<(Decimal, Decimal, Decimal)> = scenarios
            .iter()
            .map(|s| (s.hours, s.base_loss_wan, s.adjusted_loss_wan))
            .collect();
        assert_eq!(
            rows,
            vec![
                (dec!(2), dec!(34.2), dec!(27.4)),
                (dec!(4), dec!(68.4), dec!(54.7)),
                (dec!(8), dec!(136.8), dec!(109.4)),
            ]
        );
    }
}
