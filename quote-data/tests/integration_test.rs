//! Integration tests that load the on-disk fixtures shipped with the crate.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use quote_core::Category;
use quote_core::calculations::{QuoteAnalysis, SuitabilityTier};
use quote_data::{CatalogLoader, QuoteConfig, default_catalog, default_profile};
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_fixture_catalog_matches_built_in_defaults() {
    let catalog = CatalogLoader::load_from_file(&fixture("default_catalog.csv"))
        .expect("fixture catalog should load");

    assert_eq!(catalog, default_catalog());
}

#[test]
fn test_fixture_catalog_keeps_quoted_product_code() {
    let catalog = CatalogLoader::load_from_file(&fixture("default_catalog.csv")).unwrap();

    assert_eq!(
        catalog.plan(Category::Hardware, "basic").unwrap().product_code,
        "HPC-8208-WS01-C*3, 968AC00100*2, UN0-2372G-BTO*1"
    );
}

#[test]
fn test_quote_file_resolves_catalog_next_to_it() {
    let config = QuoteConfig::load(&fixture("quote.toml")).expect("fixture quote should load");

    assert_eq!(config.catalog, Some(fixture("default_catalog.csv")));
    assert!(config.merged_shift_patterns().contains_key("weekend"));
}

#[test]
fn test_quote_file_company_matches_default_profile() {
    let config = QuoteConfig::load(&fixture("quote.toml")).unwrap();
    let expected = quote_core::CompanyProfile {
        tax_id: "2246-6560".to_string(),
        ..default_profile()
    };

    assert_eq!(config.company, expected);
}

#[test]
fn test_full_analysis_from_fixtures() {
    let config = QuoteConfig::load(&fixture("quote.toml")).unwrap();
    let catalog_path = config.catalog.clone().unwrap();
    let catalog = CatalogLoader::load_from_file(&catalog_path).unwrap();

    let analysis =
        QuoteAnalysis::analyze(&config.company, &catalog, &config.merged_shift_patterns())
            .expect("analysis should succeed");

    assert_eq!(analysis.revenue.daily_wan, dec!(411));
    assert_eq!(analysis.revenue.hourly_wan, dec!(17.1));

    let break_even: Vec<_> = analysis
        .combinations
        .iter()
        .map(|c| c.break_even_hours)
        .collect();
    assert_eq!(
        break_even,
        vec![Some(dec!(2.6)), Some(dec!(3.4)), Some(dec!(5.6))]
    );

    let premium_hw = analysis.assessment(Category::Hardware, "premium").unwrap();
    assert_eq!(premium_hw.assessment.tier, SuitabilityTier::Excellent);
}

#[test]
fn test_missing_quote_file_is_io_error() {
    let err = QuoteConfig::load(&fixture("nope.toml")).unwrap_err();

    assert!(matches!(err, quote_data::ConfigError::Io { .. }));
}
