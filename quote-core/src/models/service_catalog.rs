use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::service_plan::{Category, ServicePlan, TierKey};

/// Errors raised when looking up or editing a [`ServiceCatalog`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No plan exists for the requested tier.
    #[error("no {category} plan for tier '{tier}'")]
    UnknownTier { category: Category, tier: String },

    /// A plan already exists for the requested tier.
    #[error("{category} tier '{tier}' already exists")]
    DuplicateTier { category: Category, tier: String },

    /// Tier keys must contain at least one non-whitespace character.
    #[error("tier key must not be empty")]
    EmptyTierKey,

    /// Plan prices must be non-negative.
    #[error("{category} tier '{tier}' has a negative price: {price}")]
    NegativePrice {
        category: Category,
        tier: String,
        price: Decimal,
    },

    /// Plan prices are whole currency units.
    #[error("{category} tier '{tier}' has a fractional price: {price}")]
    FractionalPrice {
        category: Category,
        tier: String,
        price: Decimal,
    },

    /// A feature index was outside the plan's feature list.
    #[error("feature index {index} out of range for {category} tier '{tier}' ({len} features)")]
    FeatureIndexOutOfRange {
        category: Category,
        tier: String,
        index: usize,
        len: usize,
    },

    /// The combined annual price of a tier pair exceeded the decimal range.
    #[error("combined price of platform '{platform_tier}' and hardware '{hardware_tier}' overflowed")]
    PriceOverflow {
        platform_tier: String,
        hardware_tier: String,
    },
}

/// Checks that `price` is a non-negative whole amount.
pub(crate) fn check_price(
    category: Category,
    tier: &str,
    price: Decimal,
) -> Result<(), CatalogError> {
    if price < Decimal::ZERO {
        return Err(CatalogError::NegativePrice {
            category,
            tier: tier.to_string(),
            price,
        });
    }
    if !price.fract().is_zero() {
        return Err(CatalogError::FractionalPrice {
            category,
            tier: tier.to_string(),
            price,
        });
    }
    Ok(())
}

/// The full set of plans offered in a quote, grouped by category and tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    #[serde(default)]
    pub platform: BTreeMap<TierKey, ServicePlan>,
    #[serde(default)]
    pub hardware: BTreeMap<TierKey, ServicePlan>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(
        &self,
        category: Category,
    ) -> &BTreeMap<TierKey, ServicePlan> {
        match category {
            Category::Platform => &self.platform,
            Category::Hardware => &self.hardware,
        }
    }

    pub(crate) fn category_mut(
        &mut self,
        category: Category,
    ) -> &mut BTreeMap<TierKey, ServicePlan> {
        match category {
            Category::Platform => &mut self.platform,
            Category::Hardware => &mut self.hardware,
        }
    }

    /// Looks up the plan for `tier` in `category`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTier`] if the tier is not present.
    pub fn plan(
        &self,
        category: Category,
        tier: &str,
    ) -> Result<&ServicePlan, CatalogError> {
        let key = TierKey::new(tier);
        self.category(category)
            .get(&key)
            .ok_or_else(|| CatalogError::UnknownTier {
                category,
                tier: key.to_string(),
            })
    }

    pub(crate) fn plan_mut(
        &mut self,
        category: Category,
        tier: &str,
    ) -> Result<&mut ServicePlan, CatalogError> {
        let key = TierKey::new(tier);
        self.category_mut(category)
            .get_mut(&key)
            .ok_or_else(|| CatalogError::UnknownTier {
                category,
                tier: key.to_string(),
            })
    }

    /// Inserts or replaces a plan, returning the previous one.
    pub fn insert(
        &mut self,
        category: Category,
        tier: impl Into<TierKey>,
        plan: ServicePlan,
    ) -> Option<ServicePlan> {
        self.category_mut(category).insert(tier.into(), plan)
    }

    /// Iterates every plan, platform first, tiers in display order.
    pub fn plans(&self) -> impl Iterator<Item = (Category, &TierKey, &ServicePlan)> {
        Category::ALL.into_iter().flat_map(move |category| {
            self.category(category)
                .iter()
                .map(move |(tier, plan)| (category, tier, plan))
        })
    }

    /// Tiers present in both categories, in display order.
    pub fn shared_tiers(&self) -> Vec<TierKey> {
        self.platform
            .keys()
            .filter(|tier| self.hardware.contains_key(tier))
            .cloned()
            .collect()
    }

    /// Checks every plan's invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyTierKey`], [`CatalogError::NegativePrice`]
    /// or [`CatalogError::FractionalPrice`] for the first offending plan.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (category, tier, plan) in self.plans() {
            if tier.is_empty() {
                return Err(CatalogError::EmptyTierKey);
            }
            check_price(category, tier.as_str(), plan.price)?;
        }
        Ok(())
    }
}
