use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a shift pattern violates its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShiftPatternError {
    /// Working hours must be in (0, 24].
    #[error("working hours must be between 1 and 24, got {0}")]
    InvalidWorkingHours(u8),

    /// The risk multiplier must be in (0, 1].
    #[error("risk multiplier must be greater than 0 and at most 1, got {0}")]
    InvalidRiskMultiplier(Decimal),
}

/// Coarse operating-hours class used by the suitability rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftBucket {
    /// Facility runs around the clock (24 hours).
    Continuous,
    /// Two shifts, 12 to 23 hours a day.
    TwoShift,
    /// A standard day shift, under 12 hours.
    Standard,
}

impl ShiftBucket {
    pub fn from_working_hours(working_hours: u8) -> Self {
        if working_hours >= 24 {
            Self::Continuous
        } else if working_hours >= 12 {
            Self::TwoShift
        } else {
            Self::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::TwoShift => "two_shift",
            Self::Standard => "standard",
        }
    }
}

fn default_risk_multiplier() -> Decimal {
    Decimal::ONE
}

/// An operating-hours profile with its downtime-risk multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPattern {
    pub name: String,
    /// Hours per day the facility operates.
    pub working_hours: u8,
    /// Scales downtime-loss severity. Defaults to 1.0 when omitted.
    #[serde(default = "default_risk_multiplier")]
    pub risk_multiplier: Decimal,
    #[serde(default)]
    pub description: String,
}

impl ShiftPattern {
    pub fn new(
        name: impl Into<String>,
        working_hours: u8,
        risk_multiplier: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            working_hours,
            risk_multiplier,
            description: description.into(),
        }
    }

    pub fn bucket(&self) -> ShiftBucket {
        ShiftBucket::from_working_hours(self.working_hours)
    }

    pub fn validate(&self) -> Result<(), ShiftPatternError> {
        if self.working_hours == 0 || self.working_hours > 24 {
            return Err(ShiftPatternError::InvalidWorkingHours(self.working_hours));
        }
        if self.risk_multiplier <= Decimal::ZERO || self.risk_multiplier > Decimal::ONE {
            return Err(ShiftPatternError::InvalidRiskMultiplier(
                self.risk_multiplier,
            ));
        }
        Ok(())
    }

    /// The built-in shift patterns, keyed by the value stored in
    /// [`CompanyProfile::shift_pattern`](crate::CompanyProfile::shift_pattern).
    pub fn defaults() -> BTreeMap<String, ShiftPattern> {
        [
            (
                "standard",
                ShiftPattern::new(
                    "Standard shift",
                    8,
                    Decimal::new(6, 1),
                    "Single 8-hour day shift",
                ),
            ),
            (
                "two_shift",
                ShiftPattern::new(
                    "Two-shift",
                    12,
                    Decimal::new(8, 1),
                    "Two shifts covering 12 hours a day",
                ),
            ),
            (
                "extended",
                ShiftPattern::new(
                    "Extended two-shift",
                    16,
                    Decimal::new(9, 1),
                    "Two 8-hour shifts covering 16 hours a day",
                ),
            ),
            (
                "continuous",
                ShiftPattern::new(
                    "Continuous production",
                    24,
                    Decimal::ONE,
                    "Four crews on two rotations, running 24 hours a day",
                ),
            ),
        ]
        .into_iter()
        .map(|(key, pattern)| (key.to_string(), pattern))
        .collect()
    }
}
