//! Plan suitability for a customer's operating hours.
//!
//! A plan's capabilities are read from its feature text by keyword, unless
//! the plan states them explicitly. The tier then follows from a fixed table
//! over the shift bucket:
//!
//! | Shift bucket           | excellent                         | conditional        | otherwise |
//! |------------------------|-----------------------------------|--------------------|-----------|
//! | continuous (>= 24 h)   | 24x7 and on-site and inspection   | 5x8 and inspection | risky     |
//! | two-shift (>= 12 h)    | 24x7, or 5x8 and inspection       | 5x8                | basic     |
//! | standard (< 12 h)      | 5x8                               | never              | basic     |
//!
//! Disabled plans are always `disabled`.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::break_even::break_even_hours;
use crate::{Capabilities, ServicePlan, ShiftBucket, ShiftPattern};

const ROUND_THE_CLOCK_KEYWORDS: [&str; 3] = ["7*24", "24小時", "全時段"];
const BUSINESS_HOURS_KEYWORDS: [&str; 2] = ["5*8", "工作時間"];
const INSPECTION_KEYWORDS: [&str; 3] = ["巡檢", "定期", "檢查"];
const ON_SITE_KEYWORDS: [&str; 3] = ["到場", "現場", "維修"];

/// Qualitative fit of a plan for a shift pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityTier {
    Disabled,
    Excellent,
    Conditional,
    Risky,
    Basic,
}

impl SuitabilityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Excellent => "excellent",
            Self::Conditional => "conditional",
            Self::Risky => "risky",
            Self::Basic => "basic",
        }
    }
}

impl fmt::Display for SuitabilityTier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads capabilities from free-text features by keyword.
///
/// Features are joined with spaces and lower-cased before matching, so a
/// keyword split across two features is not found.
pub fn detect_capabilities<S: AsRef<str>>(features: &[S]) -> Capabilities {
    let text = features
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    Capabilities {
        round_the_clock: has_any(&ROUND_THE_CLOCK_KEYWORDS),
        business_hours: has_any(&BUSINESS_HOURS_KEYWORDS),
        inspection: has_any(&INSPECTION_KEYWORDS),
        on_site: has_any(&ON_SITE_KEYWORDS),
    }
}

/// The capabilities used for classification: explicit ones when set,
/// otherwise those detected from the feature text.
pub fn plan_capabilities(plan: &ServicePlan) -> Capabilities {
    plan.capabilities
        .unwrap_or_else(|| detect_capabilities(&plan.features))
}

/// Classifies an enabled plan with `capabilities` under `bucket`.
///
/// Never returns [`SuitabilityTier::Disabled`]; see [`classify_plan`].
pub fn classify(
    bucket: ShiftBucket,
    capabilities: Capabilities,
) -> SuitabilityTier {
    let Capabilities {
        round_the_clock,
        business_hours,
        inspection,
        on_site,
    } = capabilities;

    match bucket {
        ShiftBucket::Continuous => {
            if round_the_clock && on_site && inspection {
                SuitabilityTier::Excellent
            } else if business_hours && inspection {
                SuitabilityTier::Conditional
            } else {
                SuitabilityTier::Risky
            }
        }
        ShiftBucket::TwoShift => {
            if round_the_clock || (business_hours && inspection) {
                SuitabilityTier::Excellent
            } else if business_hours {
                SuitabilityTier::Conditional
            } else {
                SuitabilityTier::Basic
            }
        }
        ShiftBucket::Standard => {
            if business_hours {
                SuitabilityTier::Excellent
            } else {
                SuitabilityTier::Basic
            }
        }
    }
}

/// Classifies `plan` under `pattern`.
pub fn classify_plan(
    plan: &ServicePlan,
    pattern: &ShiftPattern,
) -> SuitabilityTier {
    if !plan.enabled {
        return SuitabilityTier::Disabled;
    }
    classify(pattern.bucket(), plan_capabilities(plan))
}

/// A classification with the figures and notes shown alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuitabilityAssessment {
    pub tier: SuitabilityTier,
    /// Hours of avoided downtime that pay for the plan. `None` for disabled
    /// plans or when revenue is too small to divide by.
    pub break_even_hours: Option<Decimal>,
    pub notes: Vec<&'static str>,
}

fn advisory_notes(
    bucket: ShiftBucket,
    tier: SuitabilityTier,
) -> Vec<&'static str> {
    use ShiftBucket::*;
    use SuitabilityTier::*;

    match (bucket, tier) {
        (_, Disabled) => vec!["Plan is not enabled"],
        (Continuous, Excellent) => vec![
            "Round-the-clock support suits continuous production",
            "On-site service backed by preventive maintenance",
            "Keeps production interruptions to a minimum",
        ],
        (Continuous, Conditional) => vec![
            "Night shifts remain exposed and need internal cover",
            "Preventive inspections lower the chance of failure",
            "Staff a night-shift technician",
        ],
        (Continuous, _) => vec![
            "Runs 24 hours without night-time support",
            "No preventive maintenance, so failure risk is high",
            "Upgrade to a higher tier",
        ],
        (TwoShift, Excellent) => vec![
            "Service level matches production needs",
            "Support coverage is sufficient",
        ],
        (TwoShift, Conditional) => vec![
            "Night-shift risk is manageable",
            "Basic technical support is sufficient",
        ],
        (TwoShift, _) => vec!["Low service level, for environments that tolerate risk"],
        (Standard, Excellent) => vec![
            "Service hours match working hours",
            "Most cost-effective choice",
        ],
        (Standard, _) => vec!["Basic service meets standard-shift needs"],
    }
}

/// Classifies `plan` and attaches its break-even hours and advisory notes.
pub fn assess_plan(
    plan: &ServicePlan,
    pattern: &ShiftPattern,
    annual_revenue_wan: Decimal,
) -> SuitabilityAssessment {
    let tier = classify_plan(plan, pattern);

    let break_even = if tier == SuitabilityTier::Disabled {
        None
    } else {
        match break_even_hours(plan.price, annual_revenue_wan) {
            Ok(hours) => Some(hours),
            Err(error) => {
                warn!(
                    price = %plan.price,
                    annual_revenue_wan = %annual_revenue_wan,
                    %error,
                    "Break-even hours unavailable for plan"
                );
                None
            }
        }
    };

    debug!(title = %plan.title, %tier, "Classified plan");

    SuitabilityAssessment {
        tier,
        break_even_hours: break_even,
        notes: advisory_notes(pattern.bucket(), tier),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn pattern(hours: u8) -> ShiftPattern {
        ShiftPattern::new(format!("{hours}h"), hours, dec!(1), "")
    }

    fn caps(round_the_clock: bool, business_hours: bool, inspection: bool, on_site: bool) -> Capabilities {
        Capabilities {
            round_the_clock,
            business_hours,
            inspection,
            on_site,
        }
    }

    fn all_capability_combinations() -> Vec<Capabilities> {
        (0u8..16)
            .map(|bits| caps(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0))
            .collect()
    }

    // =========================================================================
    // detect_capabilities tests
    // =========================================================================

    #[test]
    fn detects_each_keyword_group() {
        assert_eq!(detect_capabilities(&["7*24 全時段技術支持"]), caps(true, false, false, false));
        assert_eq!(detect_capabilities(&["24小時支援"]), caps(true, false, false, false));
        assert_eq!(detect_capabilities(&["5*8 技術支持"]), caps(false, true, false, false));
        assert_eq!(detect_capabilities(&["工作時間內回應"]), caps(false, true, false, false));
        assert_eq!(detect_capabilities(&["平台健康狀態巡檢 × 4次"]), caps(false, false, true, false));
        assert_eq!(detect_capabilities(&["定期保養"]), caps(false, false, true, false));
        assert_eq!(detect_capabilities(&["系統檢查"]), caps(false, false, true, false));
        assert_eq!(detect_capabilities(&["到場服務"]), caps(false, false, false, true));
        assert_eq!(detect_capabilities(&["現場支援"]), caps(false, false, false, true));
        assert_eq!(detect_capabilities(&["隔日到府維修"]), caps(false, false, false, true));
    }

    #[test]
    fn detection_ignores_unrelated_text() {
        let features = ["軟體、韌體更新服務", "重大風險主動通知"];

        assert_eq!(detect_capabilities(&features), Capabilities::default());
    }

    #[test]
    fn detection_of_empty_feature_list() {
        let features: [&str; 0] = [];

        assert_eq!(detect_capabilities(&features), Capabilities::default());
    }

    #[test]
    fn explicit_capabilities_override_feature_text() {
        let mut plan = ServicePlan::new("plan", dec!(1)).with_features(["7*24 support"]);
        plan.capabilities = Some(caps(false, true, false, false));

        assert_eq!(plan_capabilities(&plan), caps(false, true, false, false));
    }

    // =========================================================================
    // classify tests
    // =========================================================================

    #[test]
    fn continuous_shift_table() {
        let bucket = ShiftBucket::Continuous;

        assert_eq!(classify(bucket, caps(true, false, true, true)), SuitabilityTier::Excellent);
        assert_eq!(classify(bucket, caps(true, false, true, false)), SuitabilityTier::Risky);
        assert_eq!(classify(bucket, caps(false, true, true, false)), SuitabilityTier::Conditional);
        assert_eq!(classify(bucket, caps(true, true, true, false)), SuitabilityTier::Conditional);
        assert_eq!(classify(bucket, caps(false, true, false, true)), SuitabilityTier::Risky);
        assert_eq!(classify(bucket, Capabilities::default()), SuitabilityTier::Risky);
    }

    #[test]
    fn two_shift_table() {
        let bucket = ShiftBucket::TwoShift;

        assert_eq!(classify(bucket, caps(true, false, false, false)), SuitabilityTier::Excellent);
        assert_eq!(classify(bucket, caps(false, true, true, false)), SuitabilityTier::Excellent);
        assert_eq!(classify(bucket, caps(false, true, false, true)), SuitabilityTier::Conditional);
        assert_eq!(classify(bucket, caps(false, false, true, true)), SuitabilityTier::Basic);
    }

    #[test]
    fn standard_shift_table() {
        let bucket = ShiftBucket::Standard;

        assert_eq!(classify(bucket, caps(false, true, false, false)), SuitabilityTier::Excellent);
        assert_eq!(classify(bucket, caps(true, false, true, true)), SuitabilityTier::Basic);
    }

    #[test]
    fn classify_is_total_and_never_disabled_for_enabled_plans() {
        for bucket in [ShiftBucket::Continuous, ShiftBucket::TwoShift, ShiftBucket::Standard] {
            for capabilities in all_capability_combinations() {
                let tier = classify(bucket, capabilities);

                assert_ne!(tier, SuitabilityTier::Disabled);
                let allowed: &[SuitabilityTier] = match bucket {
                    ShiftBucket::Continuous => &[
                        SuitabilityTier::Excellent,
                        SuitabilityTier::Conditional,
                        SuitabilityTier::Risky,
                    ],
                    ShiftBucket::TwoShift => &[
                        SuitabilityTier::Excellent,
                        SuitabilityTier::Conditional,
                        SuitabilityTier::Basic,
                    ],
                    ShiftBucket::Standard => &[SuitabilityTier::Excellent, SuitabilityTier::Basic],
                };
                assert!(allowed.contains(&tier), "{bucket:?} {capabilities:?} -> {tier}");
            }
        }
    }

    // =========================================================================
    // classify_plan tests
    // =========================================================================

    #[test]
    fn round_the_clock_plan_is_excellent_for_continuous_production() {
        let plan = ServicePlan::new("Premium", dec!(500000))
            .with_features(["7*24全時段", "設備巡檢", "到場服務"]);

        assert_eq!(classify_plan(&plan, &pattern(24)), SuitabilityTier::Excellent);
    }

    #[test]
    fn round_the_clock_plan_without_business_hours_text_is_basic_for_day_shift() {
        let plan = ServicePlan::new("Premium", dec!(500000))
            .with_features(["7*24全時段", "設備巡檢", "到場服務"]);

        assert_eq!(classify_plan(&plan, &pattern(8)), SuitabilityTier::Basic);
    }

    #[test]
    fn disabled_plan_is_disabled_under_every_pattern() {
        let plan = ServicePlan::new("Premium", dec!(500000))
            .with_features(["5*8 技術支持"])
            .disabled();

        for hours in [8, 12, 16, 24] {
            assert_eq!(classify_plan(&plan, &pattern(hours)), SuitabilityTier::Disabled);
        }
    }

    // =========================================================================
    // assess_plan tests
    // =========================================================================

    #[test]
    fn assessment_carries_break_even_hours() {
        let plan = ServicePlan::new("Hardware Premium", dec!(500000))
            .with_features(["7*24 全時段技術支持", "5*8 基礎層設備巡檢 × 2次", "7*8到場服務"]);

        let assessment = assess_plan(&plan, &pattern(24), dec!(150000));

        // 500,000 / 171,233 = 2.92
        assert_eq!(assessment.tier, SuitabilityTier::Excellent);
        assert_eq!(assessment.break_even_hours, Some(dec!(2.9)));
        assert_eq!(assessment.notes.len(), 3);
    }

    #[test]
    fn assessment_of_disabled_plan_has_no_break_even() {
        let plan = ServicePlan::new("Off", dec!(1000)).disabled();

        let assessment = assess_plan(&plan, &pattern(24), dec!(150000));

        assert_eq!(
            assessment,
            SuitabilityAssessment {
                tier: SuitabilityTier::Disabled,
                break_even_hours: None,
                notes: vec!["Plan is not enabled"],
            }
        );
    }

    #[test]
    fn assessment_with_zero_revenue_omits_break_even() {
        let plan = ServicePlan::new("Basic", dec!(1000)).with_features(["5*8"]);

        let assessment = assess_plan(&plan, &pattern(8), dec!(0));

        assert_eq!(assessment.tier, SuitabilityTier::Excellent);
        assert_eq!(assessment.break_even_hours, None);
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&SuitabilityTier::Conditional).unwrap();

        assert_eq!(json, r#""conditional""#);
    }
}
