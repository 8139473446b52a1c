//! Pricing and risk calculations for maintenance quotes.
//!
//! This module provides the revenue, downtime, break-even, combined-price
//! and suitability calculations, plus the [`QuoteAnalysis`] aggregate that
//! runs them all over one profile and catalog snapshot. Every function here
//! is pure.

pub mod analysis;
pub mod break_even;
pub mod combiner;
pub mod common;
pub mod downtime;
pub mod error;
pub mod revenue;
pub mod suitability;

pub use analysis::{
    AnalysisError, CombinationAnalysis, PlanAssessment, QuoteAnalysis, analyze_pair,
    recommended_tier,
};
pub use break_even::break_even_hours;
pub use combiner::{TierPairCost, combined_price, standard_combinations};
pub use downtime::{DowntimeScenario, STANDARD_OUTAGE_HOURS, downtime_risk, downtime_scenarios};
pub use error::CalculationError;
pub use revenue::{RevenueBreakdown, daily_revenue, hourly_revenue, hourly_revenue_currency};
pub use suitability::{
    SuitabilityAssessment, SuitabilityTier, assess_plan, classify, classify_plan,
    detect_capabilities, plan_capabilities,
};
