use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::shift_pattern::{ShiftPattern, ShiftPatternError};

/// Errors raised when a company profile cannot be used for a calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// Annual revenue must be strictly positive.
    #[error("annual revenue must be positive, got {0}")]
    NonPositiveRevenue(Decimal),

    /// The profile references a shift pattern that is not defined.
    #[error("unknown shift pattern '{0}'")]
    UnknownShiftPattern(String),

    /// The referenced shift pattern is itself invalid.
    #[error("shift pattern '{key}' is invalid: {source}")]
    InvalidShiftPattern {
        key: String,
        #[source]
        source: ShiftPatternError,
    },

    /// The quote expires before it was issued.
    #[error("valid-until date {valid} is before quote date {quoted}")]
    ValidDateBeforeQuoteDate { quoted: NaiveDate, valid: NaiveDate },
}

/// The customer a quote is prepared for.
///
/// Only `annual_revenue` and `shift_pattern` take part in calculations; the
/// remaining fields are carried for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub fax: String,
    #[serde(default)]
    pub quote_date: Option<NaiveDate>,
    #[serde(default)]
    pub valid_date: Option<NaiveDate>,
    /// Annual revenue in wan (萬元).
    pub annual_revenue: Decimal,
    /// Key into the shift-pattern table.
    pub shift_pattern: String,
    #[serde(default)]
    pub special_requirements: String,
}

impl CompanyProfile {
    pub fn new(
        annual_revenue: Decimal,
        shift_pattern: impl Into<String>,
    ) -> Self {
        Self {
            annual_revenue,
            shift_pattern: shift_pattern.into(),
            ..Default::default()
        }
    }

    /// Validates the fields that feed calculations.
    ///
    /// # Errors
    ///
    /// * [`ProfileError::NonPositiveRevenue`] if revenue is zero or negative.
    /// * [`ProfileError::ValidDateBeforeQuoteDate`] if both dates are set and
    ///   out of order.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.annual_revenue <= Decimal::ZERO {
            return Err(ProfileError::NonPositiveRevenue(self.annual_revenue));
        }
        match (self.quote_date, self.valid_date) {
            (Some(quoted), Some(valid)) if valid < quoted => {
                return Err(ProfileError::ValidDateBeforeQuoteDate { quoted, valid });
            }
            _ => {}
        }
        Ok(())
    }

    /// Finds and validates this profile's shift pattern in `patterns`.
    ///
    /// # Errors
    ///
    /// * [`ProfileError::UnknownShiftPattern`] if the key is not present.
    /// * [`ProfileError::InvalidShiftPattern`] if the pattern breaks its invariants.
    pub fn resolve_shift<'a>(
        &self,
        patterns: &'a BTreeMap<String, ShiftPattern>,
    ) -> Result<&'a ShiftPattern, ProfileError> {
        let pattern = patterns
            .get(self.shift_pattern.trim())
            .ok_or_else(|| ProfileError::UnknownShiftPattern(self.shift_pattern.clone()))?;
        pattern
            .validate()
            .map_err(|source| ProfileError::InvalidShiftPattern {
                key: self.shift_pattern.clone(),
                source,
            })?;
        Ok(pattern)
    }

    /// Returns a copy with surrounding whitespace removed from every text field.
    pub fn trimmed(&self) -> Self {
        Self {
            company_name: self.company_name.trim().to_string(),
            tax_id: self.tax_id.trim().to_string(),
            address: self.address.trim().to_string(),
            contact: self.contact.trim().to_string(),
            phone: self.phone.trim().to_string(),
            fax: self.fax.trim().to_string(),
            shift_pattern: self.shift_pattern.trim().to_string(),
            special_requirements: self.special_requirements.trim().to_string(),
            ..self.clone()
        }
    }
}
