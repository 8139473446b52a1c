use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two service categories a quote is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Platform,
    Hardware,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Platform, Category::Hardware];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Hardware => "hardware",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platform" => Some(Self::Platform),
            "hardware" => Some(Self::Hardware),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of a tier within a category.
///
/// The well-known keys are `basic`, `advanced` and `premium`, but any
/// non-empty key is allowed. Keys are trimmed and lower-cased. Ordering puts
/// the well-known keys first, in that order, followed by the rest
/// alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TierKey(String);

impl TierKey {
    pub const BASIC: &'static str = "basic";
    pub const ADVANCED: &'static str = "advanced";
    pub const PREMIUM: &'static str = "premium";

    pub fn new(key: impl AsRef<str>) -> Self {
        Self(key.as_ref().trim().to_lowercase())
    }

    pub fn basic() -> Self {
        Self::new(Self::BASIC)
    }

    pub fn advanced() -> Self {
        Self::new(Self::ADVANCED)
    }

    pub fn premium() -> Self {
        Self::new(Self::PREMIUM)
    }

    /// The well-known keys in display order.
    pub fn standard() -> [TierKey; 3] {
        [Self::basic(), Self::advanced(), Self::premium()]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display label, e.g. `Premium MA`.
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => format!("{}{} MA", first.to_uppercase(), chars.as_str()),
            None => "MA".to_string(),
        }
    }

    fn rank(&self) -> u8 {
        match self.0.as_str() {
            Self::BASIC => 0,
            Self::ADVANCED => 1,
            Self::PREMIUM => 2,
            _ => 3,
        }
    }
}

impl Ord for TierKey {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for TierKey {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<String> for TierKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for TierKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<TierKey> for String {
    fn from(value: TierKey) -> Self {
        value.0
    }
}

impl fmt::Display for TierKey {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Service capabilities that drive the suitability rules.
///
/// Normally derived from a plan's feature text, but a plan may state them
/// explicitly through [`ServicePlan::capabilities`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// 7x24 round-the-clock support.
    #[serde(default)]
    pub round_the_clock: bool,
    /// 5x8 business-hours support.
    #[serde(default)]
    pub business_hours: bool,
    /// Periodic inspections or health checks.
    #[serde(default)]
    pub inspection: bool,
    /// On-site visits or repairs.
    #[serde(default)]
    pub on_site: bool,
}

fn default_enabled() -> bool {
    true
}

/// A priced maintenance plan for one tier of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePlan {
    #[serde(default)]
    pub product_code: String,
    #[serde(default)]
    pub title: String,
    /// Annual cost in raw currency units.
    pub price: Decimal,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Free-text capability descriptions, in display order.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,
}

impl ServicePlan {
    pub fn new(
        title: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            product_code: String::new(),
            title: title.into(),
            price,
            enabled: true,
            features: Vec::new(),
            capabilities: None,
        }
    }

    pub fn with_product_code(
        mut self,
        product_code: impl Into<String>,
    ) -> Self {
        self.product_code = product_code.into();
        self
    }

    pub fn with_features<I, S>(
        mut self,
        features: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// The price that counts toward combined costs: zero when disabled.
    pub fn effective_price(&self) -> Decimal {
        if self.enabled {
            self.price
        } else {
            Decimal::ZERO
        }
    }
}
