//! CSV loader for service catalogs.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column         | Required | Type    | Notes                                      |
//! |----------------|----------|---------|--------------------------------------------|
//! | `category`     | yes      | string  | `platform` or `hardware`                   |
//! | `tier`         | yes      | string  | e.g. `basic`; normalised to lower case     |
//! | `price`        | yes      | decimal | annual price, a whole non-negative amount  |
//! | `enabled`      | no       | bool    | `true`/`false`, empty means `true`         |
//! | `product_code` | no       | string  |                                            |
//! | `title`        | yes      | string  |                                            |
//! | `features`     | no       | string  | feature lines separated by `|`             |
//!
//! ### Example
//!
//! ```csv
//! category,tier,price,enabled,product_code,title,features
//! platform,basic,210000,true,32WSISPIT1EP01,Platform Basic MA,5*8 遠端技術支持|軟體、韌體更新服務
//! hardware,premium,500000,,,Hardware Premium MA,7*24 全時段技術支持|到場服務|設備巡檢
//! ```
use std::io::Read;
use std::path::{Path, PathBuf};

use quote_core::{CatalogError, Category, ServiceCatalog, ServicePlan, TierKey};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Separator between feature lines inside the `features` cell.
pub const FEATURE_SEPARATOR: char = '|';

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// `row` is 1-based, not counting the header.
    #[error("unrecognised category '{category}' on row {row}")]
    InvalidCategory { category: String, row: usize },

    #[error("{category} tier '{tier}' appears more than once (row {row})")]
    DuplicateTier {
        category: Category,
        tier: String,
        row: usize,
    },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

impl From<csv::Error> for CatalogLoaderError {
    fn from(err: csv::Error) -> Self {
        CatalogLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of the catalog CSV.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogRecord {
    pub category: String,
    pub tier: String,
    pub price: Decimal,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub product_code: String,
    pub title: String,
    #[serde(default)]
    pub features: String,
}

impl CatalogRecord {
    /// Splits the `features` cell, dropping blank entries.
    pub fn feature_list(&self) -> Vec<String> {
        self.features
            .split(FEATURE_SEPARATOR)
            .map(str::trim)
            .filter(|feature| !feature.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn into_plan(self) -> ServicePlan {
        let features = self.feature_list();
        ServicePlan {
            product_code: self.product_code,
            title: self.title,
            price: self.price,
            enabled: self.enabled.unwrap_or(true),
            features,
            capabilities: None,
        }
    }
}

/// Loader for service catalogs stored as CSV.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse catalog records from a CSV reader, in file order.
    ///
    /// The reader can be any type that implements `Read`, such as a file or a
    /// byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, CatalogLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: CatalogRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Assemble parsed records into a validated catalog.
    ///
    /// # Errors
    ///
    /// * [`CatalogLoaderError::InvalidCategory`] for an unknown category.
    /// * [`CatalogLoaderError::DuplicateTier`] if a (category, tier) pair repeats.
    /// * [`CatalogLoaderError::Catalog`] if a plan breaks a catalog invariant,
    ///   such as a negative price or a blank tier.
    pub fn build(records: Vec<CatalogRecord>) -> Result<ServiceCatalog, CatalogLoaderError> {
        let mut catalog = ServiceCatalog::new();

        for (idx, record) in records.into_iter().enumerate() {
            let row = idx + 1;
            let category = Category::parse(&record.category).ok_or_else(|| {
                CatalogLoaderError::InvalidCategory {
                    category: record.category.clone(),
                    row,
                }
            })?;
            let tier = TierKey::new(&record.tier);
            if catalog.category(category).contains_key(&tier) {
                return Err(CatalogLoaderError::DuplicateTier {
                    category,
                    tier: tier.to_string(),
                    row,
                });
            }

            debug!(%category, %tier, row, "loaded catalog row");
            catalog.insert(category, tier, record.into_plan());
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and assemble a catalog from CSV text.
    pub fn load_from_str(input: &str) -> Result<ServiceCatalog, CatalogLoaderError> {
        Self::build(Self::parse(input.as_bytes())?)
    }

    /// Read a catalog CSV from disk and delegate to [`CatalogLoader::load_from_str`].
    pub fn load_from_file(path: &Path) -> Result<ServiceCatalog, CatalogLoaderError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&contents)
    }
}
