use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quote_core::ServiceCatalog;
use quote_data::{CatalogLoader, QuoteConfig, default_catalog, default_profile};
use tracing::{debug, info};

/// A quote file together with the catalog it prices against.
#[derive(Debug, Clone)]
pub struct QuoteInputs {
    pub config: QuoteConfig,
    pub catalog: ServiceCatalog,
    /// Where the catalog came from, `None` for the built-in one.
    pub catalog_path: Option<PathBuf>,
}

/// Loads the quote file and catalog.
///
/// Without a quote file the sample customer is used. The catalog is taken
/// from `catalog_override`, then the quote file's `catalog` entry, then the
/// built-in plans.
pub fn load_inputs(
    config_path: Option<&Path>,
    catalog_override: Option<&Path>,
) -> Result<QuoteInputs> {
    let config = match config_path {
        Some(path) => {
            info!("Loading quote file from: {}", path.display());
            QuoteConfig::load(path)
                .with_context(|| format!("Failed to load quote file: {}", path.display()))?
        }
        None => {
            debug!("no quote file given, using sample customer");
            QuoteConfig::new(default_profile())
        }
    };

    let catalog_path = catalog_override
        .map(Path::to_path_buf)
        .or_else(|| config.catalog.clone());

    let catalog = match &catalog_path {
        Some(path) => {
            info!("Loading catalog from: {}", path.display());
            CatalogLoader::load_from_file(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?
        }
        None => {
            debug!("no catalog given, using built-in plans");
            default_catalog()
        }
    };

    Ok(QuoteInputs {
        config,
        catalog,
        catalog_path,
    })
}
