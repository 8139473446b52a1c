//! Rendering of a quote's cost/benefit analysis.

use std::collections::BTreeMap;
use std::fmt::Write;

use quote_core::calculations::{
    AnalysisError, CombinationAnalysis, QuoteAnalysis, analyze_pair, recommended_tier,
};
use quote_core::company_info::{format_price, validate_tax_id};
use quote_core::{Category, CompanyProfile, FeatureMatrix, ServiceCatalog, ShiftPattern};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

/// Which (platform, hardware) pair the customer picked, if any. A missing
/// side falls back to the recommended tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub platform: Option<String>,
    pub hardware: Option<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.hardware.is_none()
    }
}

/// Everything printed for one quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteReport {
    pub company: CompanyProfile,
    /// Normalised tax ID, `None` when the profile's value is blank or malformed.
    pub tax_id: Option<String>,
    pub analysis: QuoteAnalysis,
    pub selected: Option<CombinationAnalysis>,
    pub features: Vec<FeatureMatrix>,
}

impl QuoteReport {
    /// Analyses the quote and resolves the customer's selection.
    pub fn build(
        profile: &CompanyProfile,
        catalog: &ServiceCatalog,
        patterns: &BTreeMap<String, ShiftPattern>,
        selection: &Selection,
    ) -> Result<Self, AnalysisError> {
        let company = profile.trimmed();
        let analysis = QuoteAnalysis::analyze(&company, catalog, patterns)?;

        let tax_id = if company.tax_id.is_empty() {
            None
        } else {
            match validate_tax_id(&company.tax_id) {
                Ok(digits) => Some(digits),
                Err(error) => {
                    warn!(tax_id = %company.tax_id, %error, "Ignoring malformed tax ID");
                    None
                }
            }
        };

        let selected = if selection.is_empty() {
            None
        } else {
            let fallback = recommended_tier(analysis.bucket);
            let platform = selection.platform.as_deref().unwrap_or(fallback.as_str());
            let hardware = selection.hardware.as_deref().unwrap_or(fallback.as_str());
            Some(analyze_pair(
                catalog,
                platform,
                hardware,
                company.annual_revenue,
            )?)
        };

        let features = Category::ALL
            .into_iter()
            .map(|category| catalog.feature_matrix(category))
            .collect();

        Ok(Self {
            company,
            tax_id,
            analysis,
            selected,
            features,
        })
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text report. Feature tables are included when `with_features`.
    pub fn render_text(
        &self,
        with_features: bool,
    ) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        self.write_text(&mut out, with_features)?;
        Ok(out)
    }

    fn write_text(
        &self,
        out: &mut String,
        with_features: bool,
    ) -> std::fmt::Result {
        let company = &self.company;
        let analysis = &self.analysis;

        writeln!(out, "Quote for {}", display_or_dash(&company.company_name))?;
        if let Some(tax_id) = &self.tax_id {
            writeln!(out, "  Tax ID:      {tax_id}")?;
        }
        if !company.contact.is_empty() {
            writeln!(out, "  Contact:     {}", company.contact)?;
        }
        if !company.phone.is_empty() {
            writeln!(out, "  Phone:       {}", company.phone)?;
        }
        if let Some(date) = company.quote_date {
            writeln!(out, "  Quote date:  {date}")?;
        }
        if let Some(date) = company.valid_date {
            writeln!(out, "  Valid until: {date}")?;
        }
        writeln!(
            out,
            "  Shift:       {} ({}h/day, risk x{}) [{}]",
            analysis.shift.name,
            analysis.shift.working_hours,
            analysis.shift.risk_multiplier,
            analysis.shift_key
        )?;

        let revenue = &analysis.revenue;
        writeln!(out)?;
        writeln!(out, "Revenue")?;
        writeln!(
            out,
            "  Annual:  {} 萬 ({} 億)",
            revenue.annual_wan, revenue.annual_yi
        )?;
        writeln!(out, "  Daily:   {} 萬", revenue.daily_wan)?;
        writeln!(
            out,
            "  Hourly:  {} 萬 ({})",
            revenue.hourly_wan,
            format_price(revenue.hourly_currency)
        )?;

        writeln!(out)?;
        writeln!(out, "Downtime loss")?;
        for scenario in &analysis.downtime {
            writeln!(
                out,
                "  {:>3}h  {:>8} 萬  adjusted {:>8} 萬",
                scenario.hours, scenario.base_loss_wan, scenario.adjusted_loss_wan
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Combinations")?;
        for combination in &analysis.combinations {
            write_combination(out, "  ", combination)?;
        }

        writeln!(out)?;
        match &analysis.recommendation {
            Some(combination) => write_combination(out, "Recommended: ", combination)?,
            None => writeln!(out, "Recommended: -")?,
        }
        if let Some(combination) = &self.selected {
            write_combination(out, "Selected:    ", combination)?;
        }

        writeln!(out)?;
        writeln!(out, "Plan suitability")?;
        for plan in &analysis.assessments {
            writeln!(
                out,
                "  {:<8} {:<10} {:<12} {:>14}  {}",
                plan.category.as_str(),
                plan.tier.as_str(),
                plan.assessment.tier.as_str(),
                format_price(plan.price),
                format_hours(plan.assessment.break_even_hours)
            )?;
            for note in &plan.assessment.notes {
                writeln!(out, "      - {note}")?;
            }
        }

        if with_features {
            for matrix in &self.features {
                writeln!(out)?;
                writeln!(out, "Features ({})", matrix.category)?;
                let header: Vec<&str> = matrix.tiers.iter().map(|t| t.as_str()).collect();
                writeln!(out, "  [{}]", header.join(" | "))?;
                for row in &matrix.rows {
                    let marks: String = row
                        .included
                        .iter()
                        .map(|&included| if included { 'x' } else { '.' })
                        .collect();
                    writeln!(out, "  {marks}  {}", row.feature)?;
                }
            }
        }

        Ok(())
    }
}

fn write_combination(
    out: &mut String,
    prefix: &str,
    combination: &CombinationAnalysis,
) -> std::fmt::Result {
    let pair = format!("{} + {}", combination.platform_tier, combination.hardware_tier);
    writeln!(
        out,
        "{prefix}{:<22} {:>14}  {}",
        pair,
        format_price(combination.annual_cost),
        format_hours(combination.break_even_hours)
    )
}

fn format_hours(hours: Option<Decimal>) -> String {
    match hours {
        Some(hours) => format!("break-even {hours} h"),
        None => "break-even n/a".to_string(),
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote_core::TierKey;
    use quote_data::{default_catalog, default_profile};
    use rust_decimal_macros::dec;

    use super::*;

    fn report(selection: &Selection) -> QuoteReport {
        QuoteReport::build(
            &default_profile(),
            &default_catalog(),
            &ShiftPattern::defaults(),
            selection,
        )
        .unwrap()
    }

    #[test]
    fn build_without_selection_has_no_selected_pair() {
        let report = report(&Selection::default());

        assert_eq!(report.selected, None);
        assert_eq!(report.features.len(), 2);
    }

    #[test]
    fn build_fills_missing_side_with_recommended_tier() {
        let selection = Selection {
            platform: Some("basic".to_string()),
            hardware: None,
        };

        let selected = report(&selection).selected.unwrap();

        assert_eq!(selected.platform_tier, TierKey::basic());
        assert_eq!(selected.hardware_tier, TierKey::premium());
        assert_eq!(selected.annual_cost, dec!(710000));
        assert_eq!(selected.break_even_hours, Some(dec!(4.1)));
    }

    #[test]
    fn build_rejects_unknown_selected_tier() {
        let selection = Selection {
            platform: Some("gold".to_string()),
            hardware: None,
        };

        let result = QuoteReport::build(
            &default_profile(),
            &default_catalog(),
            &ShiftPattern::defaults(),
            &selection,
        );

        assert!(matches!(result, Err(AnalysisError::Catalog(_))));
    }

    #[test]
    fn build_normalises_tax_id() {
        let profile = CompanyProfile {
            tax_id: " 2246-6560 ".to_string(),
            ..default_profile()
        };

        let report = QuoteReport::build(
            &profile,
            &default_catalog(),
            &ShiftPattern::defaults(),
            &Selection::default(),
        )
        .unwrap();

        assert_eq!(report.tax_id.as_deref(), Some("22466560"));
    }

    #[test]
    fn build_drops_malformed_tax_id() {
        let profile = CompanyProfile {
            tax_id: "123".to_string(),
            ..default_profile()
        };

        let report = QuoteReport::build(
            &profile,
            &default_catalog(),
            &ShiftPattern::defaults(),
            &Selection::default(),
        )
        .unwrap();

        assert_eq!(report.tax_id, None);
    }

    #[test]
    fn text_report_lists_key_figures() {
        let text = report(&Selection::default()).render_text(false).unwrap();

        assert!(text.starts_with("Quote for 鈺祥企業股份有限公司\n"), "{text}");
        assert!(text.contains("Daily:   411 萬"), "{text}");
        assert!(text.contains("NT$ 171,233"), "{text}");
        assert!(text.contains("NT$ 958,000"), "{text}");
        assert!(text.contains("break-even 5.6 h"), "{text}");
        assert!(!text.contains("Features ("), "{text}");
    }

    #[test]
    fn text_report_optionally_includes_feature_tables() {
        let text = report(&Selection::default()).render_text(true).unwrap();

        assert!(text.contains("Features (platform)"), "{text}");
        assert!(text.contains("  [basic | advanced | premium]"), "{text}");
        assert!(text.contains("  xxx  5*8 WISE-PaaS 遠端技術支持"), "{text}");
        assert!(text.contains("  ..x  7*24 全時段技術支持"), "{text}");
    }

    #[test]
    fn json_report_serialises_tiers_in_lower_case() {
        let json = report(&Selection::default()).render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["analysis"]["recommendation"]["platform_tier"], "premium");
        assert_eq!(value["analysis"]["bucket"], "continuous");
        assert_eq!(value["analysis"]["assessments"][5]["tier"], "premium");
        assert_eq!(
            value["analysis"]["assessments"][5]["assessment"]["tier"],
            "excellent"
        );
    }
}
