use serde::{Deserialize, Serialize};

/// Supported currencies. Conversion factors are a fixed table relative
/// to EUR; display rounding follows each currency's conventional
/// decimal places.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
    Czk,
    Pln,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Eur,
        Currency::Usd,
        Currency::Gbp,
        Currency::Czk,
        Currency::Pln,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Czk => "CZK",
            Currency::Pln => "PLN",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Czk => "Kč",
            Currency::Pln => "zł",
        }
    }

    /// Fixed conversion factor from the EUR base, not a live rate.
    pub fn factor(&self) -> f64 {
        match self {
            Currency::Eur => 1.0,
            Currency::Usd => 1.09,
            Currency::Gbp => 0.86,
            Currency::Czk => 24.8,
            Currency::Pln => 4.26,
        }
    }

    pub fn decimals(&self) -> usize {
        match self {
            Currency::Czk => 0,
            _ => 2,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DesignTier {
    #[default]
    Basic,
    Custom,
    Premium,
}

impl DesignTier {
    /// Multiplier on base hours; basic adds zero extra design hours.
    pub fn coefficient(&self) -> f64 {
        match self {
            DesignTier::Basic => 1.0,
            DesignTier::Custom => 1.25,
            DesignTier::Premium => 1.6,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CmsTier {
    #[default]
    None,
    Wp,
    Headless,
}

impl CmsTier {
    pub fn coefficient(&self) -> f64 {
        match self {
            CmsTier::None => 0.0,
            CmsTier::Wp => 0.25,
            CmsTier::Headless => 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EshopTier {
    #[default]
    None,
    Simple,
    Advanced,
}

impl EshopTier {
    pub fn coefficient(&self) -> f64 {
        match self {
            EshopTier::None => 0.0,
            EshopTier::Simple => 0.5,
            EshopTier::Advanced => 1.1,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeoTier {
    #[default]
    None,
    Basic,
    Pro,
}

impl SeoTier {
    pub fn coefficient(&self) -> f64 {
        match self {
            SeoTier::None => 0.0,
            SeoTier::Basic => 0.15,
            SeoTier::Pro => 0.35,
        }
    }
}

/// Full input to one estimate, immutable per calculation. Both
/// breakdowns are pure functions of this struct.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EstimateConfig {
    #[serde(default)]
    pub project: ProjectSettings,
    #[serde(default)]
    pub rates: RateSettings,
    #[serde(default)]
    pub features: FeatureSettings,
    #[serde(default)]
    pub recurring: RecurringSettings,
    #[serde(default)]
    pub adjustments: AdjustmentSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectSettings {
    #[serde(default)]
    pub base_hours: f64,
    #[serde(default)]
    pub page_count: f64,
    /// Scales most hour contributions; sensible range 0.8..=1.8.
    #[serde(default = "default_complexity")]
    pub complexity: f64,
}

fn default_complexity() -> f64 {
    1.0
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            base_hours: 0.0,
            page_count: 0.0,
            complexity: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RateSettings {
    #[serde(default)]
    pub currency: Currency,
    /// Base-currency (EUR) units per hour.
    #[serde(default)]
    pub hourly_rate: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeatureSettings {
    #[serde(default)]
    pub design: DesignTier,
    #[serde(default)]
    pub cms: CmsTier,
    #[serde(default)]
    pub eshop: EshopTier,
    #[serde(default)]
    pub seo: SeoTier,
    #[serde(default = "default_languages")]
    pub languages: u32,
    #[serde(default)]
    pub accessibility: bool,
    #[serde(default)]
    pub performance: bool,
    /// Free-text "name:hours" lines, comma or newline separated.
    /// Malformed lines are dropped at parse time.
    #[serde(default)]
    pub custom: String,
}

fn default_languages() -> u32 {
    1
}

impl Default for FeatureSettings {
    fn default() -> Self {
        Self {
            design: DesignTier::default(),
            cms: CmsTier::default(),
            eshop: EshopTier::default(),
            seo: SeoTier::default(),
            languages: 1,
            accessibility: false,
            performance: false,
            custom: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RecurringSettings {
    #[serde(default)]
    pub maintenance_monthly: f64,
    #[serde(default)]
    pub hosting_monthly: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AdjustmentSettings {
    #[serde(default)]
    pub rush_percent: f64,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub vat_percent: f64,
}
