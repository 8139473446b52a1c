use serde::Serialize;

use super::service_catalog::ServiceCatalog;
use super::service_plan::{Category, TierKey};

/// One feature line and the tiers that include it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    pub feature: String,
    /// One flag per entry of [`FeatureMatrix::tiers`].
    pub included: Vec<bool>,
}

/// Side-by-side comparison of the features offered by each tier of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureMatrix {
    pub category: Category,
    pub tiers: Vec<TierKey>,
    pub rows: Vec<FeatureRow>,
}

impl ServiceCatalog {
    /// Builds the feature comparison for `category`.
    ///
    /// Rows are the union of every tier's features in first-seen order, walking
    /// tiers from basic upward. Features are compared after trimming and blank
    /// entries are skipped.
    pub fn feature_matrix(&self, category: Category) -> FeatureMatrix {
        let plans = self.category(category);
        let tiers: Vec<TierKey> = plans.keys().cloned().collect();

        let mut rows: Vec<FeatureRow> = Vec::new();
        for (column, plan) in plans.values().enumerate() {
            for feature in plan.features.iter().map(|f| f.trim()) {
                if feature.is_empty() {
                    continue;
                }
                match rows.iter_mut().find(|row| row.feature == feature) {
                    Some(row) => row.included[column] = true,
                    None => {
                        let mut included = vec![false; tiers.len()];
                        included[column] = true;
                        rows.push(FeatureRow {
                            feature: feature.to_string(),
                            included,
                        });
                    }
                }
            }
        }

        FeatureMatrix {
            category,
            tiers,
            rows,
        }
    }
}
