//! Pure edits over a [`ServiceCatalog`].
//!
//! Every edit takes the current catalog by reference and returns a new one,
//! leaving the input untouched. Editors keep the previous value for undo or
//! comparison without any copying on their side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::service_catalog::{CatalogError, ServiceCatalog, check_price};
use super::service_plan::{Capabilities, Category, TierKey};

/// A single field change on one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum CatalogUpdate {
    Price(Decimal),
    Enabled(bool),
    Title(String),
    ProductCode(String),
    /// Replaces the feature at `index`.
    Feature { index: usize, text: String },
    AddFeature(String),
    RemoveFeature(usize),
    /// Moves the feature at `from` so it ends up at `to`.
    MoveFeature { from: usize, to: usize },
    Capabilities(Option<Capabilities>),
}

impl ServiceCatalog {
    /// Applies `update` to the plan at (`category`, `tier`) and returns the
    /// resulting catalog.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::UnknownTier`] if the plan does not exist.
    /// * [`CatalogError::NegativePrice`] or [`CatalogError::FractionalPrice`]
    ///   if the new price is not a whole non-negative amount.
    /// * [`CatalogError::FeatureIndexOutOfRange`] if a feature index is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use quote_core::{CatalogUpdate, Category, ServiceCatalog, ServicePlan};
    ///
    /// let mut catalog = ServiceCatalog::new();
    /// catalog.insert(Category::Platform, "basic", ServicePlan::new("Basic MA", dec!(210000)));
    ///
    /// let updated = catalog
    ///     .apply(Category::Platform, "basic", CatalogUpdate::Price(dec!(220000)))
    ///     .unwrap();
    ///
    /// assert_eq!(updated.plan(Category::Platform, "basic").unwrap().price, dec!(220000));
    /// assert_eq!(catalog.plan(Category::Platform, "basic").unwrap().price, dec!(210000));
    /// ```
    pub fn apply(
        &self,
        category: Category,
        tier: &str,
        update: CatalogUpdate,
    ) -> Result<ServiceCatalog, CatalogError> {
        let mut next = self.clone();
        let plan = next.plan_mut(category, tier)?;
        let out_of_range = |index: usize, len: usize| CatalogError::FeatureIndexOutOfRange {
            category,
            tier: TierKey::new(tier).to_string(),
            index,
            len,
        };

        debug!(%category, tier, ?update, "applying catalog update");

        match update {
            CatalogUpdate::Price(price) => {
                check_price(category, TierKey::new(tier).as_str(), price)?;
                plan.price = price;
            }
            CatalogUpdate::Enabled(enabled) => plan.enabled = enabled,
            CatalogUpdate::Title(title) => plan.title = title,
            CatalogUpdate::ProductCode(code) => plan.product_code = code,
            CatalogUpdate::Feature { index, text } => {
                let len = plan.features.len();
                let slot = plan
                    .features
                    .get_mut(index)
                    .ok_or_else(|| out_of_range(index, len))?;
                *slot = text;
            }
            CatalogUpdate::AddFeature(text) => plan.features.push(text),
            CatalogUpdate::RemoveFeature(index) => {
                let len = plan.features.len();
                if index >= len {
                    return Err(out_of_range(index, len));
                }
                plan.features.remove(index);
            }
            CatalogUpdate::MoveFeature { from, to } => {
                let len = plan.features.len();
                if from >= len || to >= len {
                    return Err(out_of_range(from.max(to), len));
                }
                let feature = plan.features.remove(from);
                plan.features.insert(to, feature);
            }
            CatalogUpdate::Capabilities(capabilities) => plan.capabilities = capabilities,
        }

        Ok(next)
    }

    /// Copies the plan at `source` into a new tier `target`.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::EmptyTierKey`] if `target` is blank.
    /// * [`CatalogError::UnknownTier`] if `source` does not exist.
    /// * [`CatalogError::DuplicateTier`] if `target` already exists.
    pub fn duplicate_tier(
        &self,
        category: Category,
        source: &str,
        target: &str,
    ) -> Result<ServiceCatalog, CatalogError> {
        let target = TierKey::new(target);
        if target.is_empty() {
            return Err(CatalogError::EmptyTierKey);
        }
        let plan = self.plan(category, source)?.clone();
        if self.category(category).contains_key(&target) {
            return Err(CatalogError::DuplicateTier {
                category,
                tier: target.to_string(),
            });
        }

        let mut next = self.clone();
        next.insert(category, target, plan);
        Ok(next)
    }

    /// Removes the plan at (`category`, `tier`).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTier`] if the plan does not exist.
    pub fn remove_tier(
        &self,
        category: Category,
        tier: &str,
    ) -> Result<ServiceCatalog, CatalogError> {
        let key = TierKey::new(tier);
        let mut next = self.clone();
        next.category_mut(category)
            .remove(&key)
            .ok_or_else(|| CatalogError::UnknownTier {
                category,
                tier: key.to_string(),
            })?;
        Ok(next)
    }
}
