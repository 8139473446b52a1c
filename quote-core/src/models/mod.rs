mod catalog_update;
mod company_profile;
mod feature_matrix;
mod service_catalog;
mod service_plan;
mod shift_pattern;

pub use catalog_update::CatalogUpdate;
pub use company_profile::{CompanyProfile, ProfileError};
pub use feature_matrix::{FeatureMatrix, FeatureRow};
pub use service_catalog::{CatalogError, ServiceCatalog};
pub use service_plan::{Capabilities, Category, ServicePlan, TierKey};
pub use shift_pattern::{ShiftBucket, ShiftPattern, ShiftPatternError};
