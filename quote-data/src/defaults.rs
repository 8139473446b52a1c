//! Seed data for a fresh quote: the six standard maintenance plans and a
//! sample customer.

use chrono::NaiveDate;
use quote_core::{Category, CompanyProfile, ServiceCatalog, ServicePlan, TierKey};
use rust_decimal::Decimal;

const PLATFORM_PRODUCT_CODE: &str = "32WSISPIT1EP01";
const HARDWARE_PRODUCT_CODE: &str = "HPC-8208-WS01-C*3, 968AC00100*2, UN0-2372G-BTO*1";

const PLATFORM_BASIC_FEATURES: [&str; 4] = [
    "5*8 WISE-PaaS 遠端技術支持",
    "軟體、韌體更新服務",
    "平台遠端異常排除",
    "軟體正常功能維持",
];

const PLATFORM_ADVANCED_EXTRAS: [&str; 10] = [
    "協助平台應用軟體升級 × 1次",
    "協助網路憑證更新 × 1次",
    "協助執行資料庫備份 × 2次",
    "遠端歲修開關機作業 × 1次",
    "平台健康狀態巡檢 × 4次",
    "系統穩定度審查報告",
    "資料庫使用情況檢視",
    "依使用率最佳化調整",
    "重大風險主動通知",
    "一般軟體配置及架構操作指引",
];

const PLATFORM_PREMIUM_EXTRAS: [&str; 2] = ["原廠專家開發技術諮詢", "視覺化看板開發、架構規劃擴充"];

const PLATFORM_TRAINING: [&str; 2] = [
    "平台層線上基本維運培訓 × 4小時",
    "應用層線上基本維運培訓 × 8小時",
];

const HARDWARE_BASIC_FEATURES: [&str; 4] = [
    "5*8 技術支持",
    "工單系統/郵件/免付費電話",
    "軟體、韌體更新服務",
    "到場服務（隔日到府維修）× 2次",
];

const HARDWARE_ADVANCED_FEATURES: [&str; 11] = [
    "5*8 技術支持",
    "工單系統/郵件/免付費電話",
    "專屬Line報修管道",
    "軟體、韌體更新服務",
    "重大風險主動通知",
    "硬體層監控軟體與告警配置 × 1次",
    "到場服務（隔日到府維修）× 2次",
    "5*8 基礎層設備巡檢 × 2次",
    "硬體狀態確認及維護報告",
    "預防性料件更換",
    "基礎層線上基本運維培訓 × 2小時",
];

const HARDWARE_PREMIUM_FEATURES: [&str; 12] = [
    "7*24 全時段技術支持",
    "工單系統/郵件/免付費電話",
    "專屬Line報修管道",
    "專線電話",
    "軟體、韌體更新服務",
    "重大風險主動通知",
    "硬體層監控軟體與告警配置 × 1次",
    "7*8到場服務（隔日到府維修）× 2次",
    "5*8 基礎層設備巡檢 × 2次",
    "硬體狀態確認及維護報告",
    "預防性料件更換",
    "基礎層線上基本運維培訓 × 2小時",
];

fn platform_plan(
    tier: &TierKey,
    price: i64,
    features: Vec<&str>,
) -> ServicePlan {
    ServicePlan::new(
        format!("WISE-IoT SRP 維運 平台與應用層 {}", tier.label()),
        Decimal::from(price),
    )
    .with_product_code(PLATFORM_PRODUCT_CODE)
    .with_features(features)
}

fn hardware_plan(
    tier: &TierKey,
    price: i64,
    features: &[&str],
) -> ServicePlan {
    ServicePlan::new(
        format!("WISE-IoT SRP 維運 硬體基礎層 {}", tier.label()),
        Decimal::from(price),
    )
    .with_product_code(HARDWARE_PRODUCT_CODE)
    .with_features(features.iter().copied())
}

/// The standard catalog: basic, advanced and premium tiers for both the
/// platform/application layer and the hardware layer.
pub fn default_catalog() -> ServiceCatalog {
    let (basic, advanced, premium) = (TierKey::basic(), TierKey::advanced(), TierKey::premium());

    let platform_advanced: Vec<&str> = PLATFORM_BASIC_FEATURES
        .iter()
        .chain(&PLATFORM_ADVANCED_EXTRAS)
        .chain(&PLATFORM_TRAINING)
        .copied()
        .collect();
    let platform_premium: Vec<&str> = PLATFORM_BASIC_FEATURES
        .iter()
        .chain(&PLATFORM_ADVANCED_EXTRAS)
        .chain(&PLATFORM_PREMIUM_EXTRAS)
        .chain(&PLATFORM_TRAINING)
        .copied()
        .collect();

    let mut catalog = ServiceCatalog::new();
    catalog.insert(
        Category::Platform,
        basic.clone(),
        platform_plan(&basic, 210_000, PLATFORM_BASIC_FEATURES.to_vec()),
    );
    catalog.insert(
        Category::Platform,
        advanced.clone(),
        platform_plan(&advanced, 272_000, platform_advanced),
    );
    catalog.insert(
        Category::Platform,
        premium.clone(),
        platform_plan(&premium, 458_000, platform_premium),
    );
    catalog.insert(
        Category::Hardware,
        basic.clone(),
        hardware_plan(&basic, 230_000, &HARDWARE_BASIC_FEATURES),
    );
    catalog.insert(
        Category::Hardware,
        advanced.clone(),
        hardware_plan(&advanced, 310_000, &HARDWARE_ADVANCED_FEATURES),
    );
    catalog.insert(
        Category::Hardware,
        premium.clone(),
        hardware_plan(&premium, 500_000, &HARDWARE_PREMIUM_FEATURES),
    );
    catalog
}

/// A sample round-the-clock manufacturer, used when no quote file is given.
pub fn default_profile() -> CompanyProfile {
    CompanyProfile {
        company_name: "鈺祥企業股份有限公司".to_string(),
        tax_id: String::new(),
        address: "741007台南市善化區小新營300號".to_string(),
        contact: "黃彥凱".to_string(),
        phone: "02-2225-7858".to_string(),
        fax: "02-2225-0107".to_string(),
        quote_date: NaiveDate::from_ymd_opt(2025, 8, 12),
        valid_date: NaiveDate::from_ymd_opt(2025, 9, 12),
        annual_revenue: Decimal::from(150_000),
        shift_pattern: "continuous".to_string(),
        special_requirements: "24小時四班二輪制生產環境".to_string(),
    }
}
