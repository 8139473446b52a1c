mod config;
mod defaults;
mod loader;

pub use config::{ConfigError, QuoteConfig};
pub use defaults::{default_catalog, default_profile};
pub use loader::{CatalogLoader, CatalogLoaderError, CatalogRecord, FEATURE_SEPARATOR};
