//! TOML quote files.
//!
//! A quote file names the customer and, optionally, the catalog CSV and any
//! shift patterns that differ from the built-in ones:
//!
//! ```toml
//! catalog = "catalog.csv"
//!
//! [company]
//! company_name = "鈺祥企業股份有限公司"
//! annual_revenue = 150000
//! shift_pattern = "continuous"
//! quote_date = "2025-08-12"
//!
//! [shift_patterns.night]
//! name = "Night shift"
//! working_hours = 10
//! risk_multiplier = 0.7
//! ```
//!
//! Relative catalog paths are resolved against the quote file's directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use quote_core::{CompanyProfile, ProfileError, ShiftPattern, ShiftPatternError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid quote file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("shift pattern '{key}' is invalid: {source}")]
    InvalidShiftPattern {
        key: String,
        #[source]
        source: ShiftPatternError,
    },

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Everything needed to prepare one quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    pub company: CompanyProfile,
    /// Catalog CSV to price against. The built-in catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Additions to, or replacements for, the built-in shift patterns.
    #[serde(default)]
    pub shift_patterns: BTreeMap<String, ShiftPattern>,
}

impl QuoteConfig {
    pub fn new(company: CompanyProfile) -> Self {
        Self {
            company,
            catalog: None,
            shift_patterns: BTreeMap::new(),
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads and validates a quote file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&contents)?;

        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        config.validate()?;
        debug!(path = %path.display(), company = %config.company.company_name, "loaded quote file");
        Ok(config)
    }

    /// Built-in shift patterns with this file's overrides applied.
    pub fn merged_shift_patterns(&self) -> BTreeMap<String, ShiftPattern> {
        let mut patterns = ShiftPattern::defaults();
        patterns.extend(
            self.shift_patterns
                .iter()
                .map(|(key, pattern)| (key.clone(), pattern.clone())),
        );
        patterns
    }

    /// Checks every override, the company profile, and that the profile's
    /// shift pattern exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, pattern) in &self.shift_patterns {
            pattern
                .validate()
                .map_err(|source| ConfigError::InvalidShiftPattern {
                    key: key.clone(),
                    source,
                })?;
        }
        self.company.validate()?;
        self.company.resolve_shift(&self.merged_shift_patterns())?;
        Ok(())
    }
}
