//! Combined pricing for a platform plan paired with a hardware plan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CatalogError, Category, ServiceCatalog, TierKey};

/// Annual cost of the platform plan at `platform_tier` plus the hardware plan
/// at `hardware_tier`. Disabled plans contribute zero.
///
/// # Errors
///
/// * [`CatalogError::UnknownTier`] if either tier is missing.
/// * [`CatalogError::PriceOverflow`] if the sum exceeds the decimal range.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::{Category, ServiceCatalog, ServicePlan};
/// use quote_core::calculations::combined_price;
///
/// let mut catalog = ServiceCatalog::new();
/// catalog.insert(Category::Platform, "premium", ServicePlan::new("Platform Premium", dec!(458000)));
/// catalog.insert(Category::Hardware, "premium", ServicePlan::new("Hardware Premium", dec!(500000)));
///
/// assert_eq!(combined_price(&catalog, "premium", "premium").unwrap(), dec!(958000));
/// ```
pub fn combined_price(
    catalog: &ServiceCatalog,
    platform_tier: &str,
    hardware_tier: &str,
) -> Result<Decimal, CatalogError> {
    let platform = catalog.plan(Category::Platform, platform_tier)?;
    let hardware = catalog.plan(Category::Hardware, hardware_tier)?;
    platform
        .effective_price()
        .checked_add(hardware.effective_price())
        .ok_or_else(|| CatalogError::PriceOverflow {
            platform_tier: TierKey::new(platform_tier).to_string(),
            hardware_tier: TierKey::new(hardware_tier).to_string(),
        })
}

/// The cost of one (platform, hardware) tier pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPairCost {
    pub platform_tier: TierKey,
    pub hardware_tier: TierKey,
    pub annual_cost: Decimal,
}

/// Like-for-like pairs (basic + basic, advanced + advanced, ...) for every
/// tier present in both categories, in tier order.
///
/// # Errors
///
/// Returns [`CatalogError::PriceOverflow`] if any pair's price overflows.
pub fn standard_combinations(catalog: &ServiceCatalog) -> Result<Vec<TierPairCost>, CatalogError> {
    catalog
        .shared_tiers()
        .into_iter()
        .map(|tier| -> Result<TierPairCost, CatalogError> {
            let annual_cost = combined_price(catalog, tier.as_str(), tier.as_str())?;
            Ok(TierPairCost {
                platform_tier: tier.clone(),
                hardware_tier: tier,
                annual_cost,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{CatalogUpdate, ServicePlan};

    fn catalog() -> ServiceCatalog {
        let mut catalog = ServiceCatalog::new();
        for (tier, platform, hardware) in [
            ("basic", dec!(210000), dec!(230000)),
            ("advanced", dec!(272000), dec!(310000)),
            ("premium", dec!(458000), dec!(500000)),
        ] {
            catalog.insert(Category::Platform, tier, ServicePlan::new(tier, platform));
            catalog.insert(Category::Hardware, tier, ServicePlan::new(tier, hardware));
        }
        catalog
    }

    #[test]
    fn combined_price_sums_both_enabled_plans() {
        assert_eq!(combined_price(&catalog(), "premium", "premium"), Ok(dec!(958000)));
    }

    #[test]
    fn combined_price_allows_mixed_tiers() {
        assert_eq!(combined_price(&catalog(), "basic", "premium"), Ok(dec!(710000)));
    }

    #[test]
    fn disabling_a_plan_subtracts_exactly_its_price() {
        let full = catalog();
        let both = combined_price(&full, "advanced", "premium").unwrap();

        let no_platform = full
            .apply(Category::Platform, "advanced", CatalogUpdate::Enabled(false))
            .unwrap();
        let no_hardware = full
            .apply(Category::Hardware, "premium", CatalogUpdate::Enabled(false))
            .unwrap();

        assert_eq!(
            combined_price(&no_platform, "advanced", "premium"),
            Ok(both - dec!(272000))
        );
        assert_eq!(
            combined_price(&no_hardware, "advanced", "premium"),
            Ok(both - dec!(500000))
        );
    }

    #[test]
    fn combined_price_of_two_disabled_plans_is_zero() {
        let catalog = catalog()
            .apply(Category::Platform, "basic", CatalogUpdate::Enabled(false))
            .and_then(|c| c.apply(Category::Hardware, "basic", CatalogUpdate::Enabled(false)))
            .unwrap();

        assert_eq!(combined_price(&catalog, "basic", "basic"), Ok(dec!(0)));
    }

    #[test]
    fn combined_price_reports_unknown_platform_tier() {
        assert_eq!(
            combined_price(&catalog(), "platinum", "basic"),
            Err(CatalogError::UnknownTier {
                category: Category::Platform,
                tier: "platinum".to_string(),
            })
        );
    }

    #[test]
    fn combined_price_reports_unknown_hardware_tier() {
        assert_eq!(
            combined_price(&catalog(), "basic", "platinum"),
            Err(CatalogError::UnknownTier {
                category: Category::Hardware,
                tier: "platinum".to_string(),
            })
        );
    }

    #[test]
    fn combined_price_reports_overflow_instead_of_panicking() {
        let mut catalog = ServiceCatalog::new();
        catalog.insert(Category::Platform, "basic", ServicePlan::new("P", Decimal::MAX));
        catalog.insert(Category::Hardware, "basic", ServicePlan::new("H", Decimal::MAX));

        let expected = CatalogError::PriceOverflow {
            platform_tier: "basic".to_string(),
            hardware_tier: "basic".to_string(),
        };
        assert_eq!(combined_price(&catalog, "Basic", "basic"), Err(expected.clone()));
        assert_eq!(standard_combinations(&catalog), Err(expected));
    }

    #[test]
    fn standard_combinations_cover_shared_tiers_in_order() {
        let pairs = standard_combinations(&catalog()).unwrap();

        let costs: Vec<(&str, Decimal)> = pairs
            .iter()
            .map(|p| (p.platform_tier.as_str(), p.annual_cost))
            .collect();
        assert_eq!(
            costs,
            vec![
                ("basic", dec!(440000)),
                ("advanced", dec!(582000)),
                ("premium", dec!(958000)),
            ]
        );
    }

    #[test]
    fn standard_combinations_skip_tiers_missing_from_one_category() {
        let catalog = catalog().remove_tier(Category::Hardware, "advanced").unwrap();

        let tiers: Vec<String> = standard_combinations(&catalog)
            .unwrap()
            .into_iter()
            .map(|p| p.hardware_tier.to_string())
            .collect();

        assert_eq!(tiers, vec!["basic".to_string(), "premium".to_string()]);
    }
}
