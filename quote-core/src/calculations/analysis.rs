//! Full cost/benefit analysis of a quote.
//!
//! Combines every calculation into the figures a quote document shows:
//! revenue breakdown, the outage loss table, the cost and break-even point
//! of each like-for-like tier pair, per-plan suitability, and the tier pair
//! recommended for the customer's shift pattern.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use super::break_even::break_even_hours;
use super::combiner::{combined_price, standard_combinations};
use super::downtime::{DowntimeScenario, STANDARD_OUTAGE_HOURS, downtime_scenarios};
use super::error::CalculationError;
use super::revenue::RevenueBreakdown;
use super::suitability::{SuitabilityAssessment, assess_plan};
use crate::{
    CatalogError, Category, CompanyProfile, ProfileError, ServiceCatalog, ShiftBucket,
    ShiftPattern, TierKey,
};

/// Errors that prevent a quote from being analysed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

/// A tier pair with its annual cost and break-even hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinationAnalysis {
    pub platform_tier: TierKey,
    pub hardware_tier: TierKey,
    pub annual_cost: Decimal,
    /// `None` when hourly revenue rounds to zero.
    pub break_even_hours: Option<Decimal>,
}

/// Suitability of one plan in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanAssessment {
    pub category: Category,
    pub tier: TierKey,
    pub title: String,
    pub price: Decimal,
    pub enabled: bool,
    pub assessment: SuitabilityAssessment,
}

/// Everything derived from one profile and catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteAnalysis {
    pub shift_key: String,
    pub shift: ShiftPattern,
    pub bucket: ShiftBucket,
    pub revenue: RevenueBreakdown,
    pub downtime: Vec<DowntimeScenario>,
    pub combinations: Vec<CombinationAnalysis>,
    pub assessments: Vec<PlanAssessment>,
    /// The like-for-like pair suggested for the shift bucket, if both of its
    /// plans exist.
    pub recommendation: Option<CombinationAnalysis>,
}

/// The tier recommended for both categories under `bucket`.
///
/// Continuous production calls for premium; every other pattern for advanced.
pub fn recommended_tier(bucket: ShiftBucket) -> TierKey {
    match bucket {
        ShiftBucket::Continuous => TierKey::premium(),
        ShiftBucket::TwoShift | ShiftBucket::Standard => TierKey::advanced(),
    }
}

fn optional_break_even(
    annual_cost: Decimal,
    annual_revenue_wan: Decimal,
) -> Result<Option<Decimal>, CalculationError> {
    match break_even_hours(annual_cost, annual_revenue_wan) {
        Ok(hours) => Ok(Some(hours)),
        Err(CalculationError::DivisionByZero) => {
            warn!(
                annual_cost = %annual_cost,
                annual_revenue_wan = %annual_revenue_wan,
                "Hourly revenue rounds to zero; break-even hours omitted"
            );
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

/// Costs an arbitrary (platform, hardware) pair against `annual_revenue_wan`.
///
/// # Errors
///
/// * [`AnalysisError::Catalog`] if either tier is missing or the pair's
///   price overflows.
/// * [`AnalysisError::Calculation`] if revenue is negative.
pub fn analyze_pair(
    catalog: &ServiceCatalog,
    platform_tier: &str,
    hardware_tier: &str,
    annual_revenue_wan: Decimal,
) -> Result<CombinationAnalysis, AnalysisError> {
    let annual_cost = combined_price(catalog, platform_tier, hardware_tier)?;
    Ok(CombinationAnalysis {
        platform_tier: TierKey::new(platform_tier),
        hardware_tier: TierKey::new(hardware_tier),
        annual_cost,
        break_even_hours: optional_break_even(annual_cost, annual_revenue_wan)?,
    })
}

impl QuoteAnalysis {
    /// Analyses `catalog` for the customer described by `profile`, resolving
    /// the shift pattern from `patterns`.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::Profile`] if the profile is invalid or its shift
    ///   pattern cannot be resolved.
    /// * [`AnalysisError::Catalog`] if the catalog is invalid.
    /// * [`AnalysisError::Calculation`] if a derived figure cannot be computed.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use quote_core::{Category, CompanyProfile, ServiceCatalog, ServicePlan, ShiftPattern};
    /// use quote_core::calculations::{QuoteAnalysis, SuitabilityTier};
    ///
    /// let mut catalog = ServiceCatalog::new();
    /// catalog.insert(
    ///     Category::Platform,
    ///     "premium",
    ///     ServicePlan::new("Platform Premium", dec!(458000)).with_features(["5*8 support", "巡檢 × 4"]),
    /// );
    /// catalog.insert(
    ///     Category::Hardware,
    ///     "premium",
    ///     ServicePlan::new("Hardware Premium", dec!(500000)).with_features(["7*24", "巡檢", "到場服務"]),
    /// );
    ///
    /// let profile = CompanyProfile::new(dec!(150000), "continuous");
    /// let analysis = QuoteAnalysis::analyze(&profile, &catalog, &ShiftPattern::defaults()).unwrap();
    ///
    /// let recommended = analysis.recommendation.unwrap();
    /// assert_eq!(recommended.annual_cost, dec!(958000));
    /// assert_eq!(recommended.break_even_hours, Some(dec!(5.6)));
    /// assert_eq!(analysis.assessments[1].assessment.tier, SuitabilityTier::Excellent);
    /// ```
    pub fn analyze(
        profile: &CompanyProfile,
        catalog: &ServiceCatalog,
        patterns: &BTreeMap<String, ShiftPattern>,
    ) -> Result<Self, AnalysisError> {
        profile.validate()?;
        catalog.validate()?;
        let shift = profile.resolve_shift(patterns)?;
        let bucket = shift.bucket();
        let revenue_wan = profile.annual_revenue;

        let revenue = RevenueBreakdown::derive(revenue_wan)?;
        let downtime = downtime_scenarios(revenue_wan, shift, &STANDARD_OUTAGE_HOURS)?;

        let combinations = standard_combinations(catalog)?
            .into_iter()
            .map(|pair| -> Result<CombinationAnalysis, CalculationError> {
                Ok(CombinationAnalysis {
                    break_even_hours: optional_break_even(pair.annual_cost, revenue_wan)?,
                    platform_tier: pair.platform_tier,
                    hardware_tier: pair.hardware_tier,
                    annual_cost: pair.annual_cost,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let assessments = catalog
            .plans()
            .map(|(category, tier, plan)| PlanAssessment {
                category,
                tier: tier.clone(),
                title: plan.title.clone(),
                price: plan.price,
                enabled: plan.enabled,
                assessment: assess_plan(plan, shift, revenue_wan),
            })
            .collect();

        let target = recommended_tier(bucket);
        let recommendation = combinations
            .iter()
            .find(|c| c.platform_tier == target && c.hardware_tier == target)
            .cloned();
        if recommendation.is_none() {
            warn!(
                tier = %target,
                "Recommended tier is missing from one or both categories"
            );
        }

        info!(
            company = %profile.company_name,
            shift = %profile.shift_pattern,
            combinations = combinations.len(),
            plans = catalog.plans().count(),
            "Quote analysis complete"
        );

        Ok(Self {
            shift_key: profile.shift_pattern.trim().to_string(),
            shift: shift.clone(),
            bucket,
            revenue,
            downtime,
            combinations,
            assessments,
            recommendation,
        })
    }

    /// Looks up the assessment for one plan.
    pub fn assessment(
        &self,
        category: Category,
        tier: &str,
    ) -> Option<&PlanAssessment> {
        let key = TierKey::new(tier);
        self.assessments
            .iter()
            .find(|a| a.category == category && a.tier == key)
    }
}
