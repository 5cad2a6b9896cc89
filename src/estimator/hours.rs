use serde::Serialize;

use crate::config::EstimateConfig;
use crate::estimator::features::parse_features;

/// Named hour contributions, recomputed from scratch on every call.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HoursBreakdown {
    pub base: f64,
    pub pages: f64,
    pub design: f64,
    pub cms: f64,
    pub eshop: f64,
    pub seo: f64,
    pub languages: f64,
    pub accessibility: f64,
    pub performance: f64,
    pub custom: f64,
    pub total: f64,
}

/// Hours added per page beyond the first, before complexity scaling.
const HOURS_PER_EXTRA_PAGE: f64 = 2.0;

/// Share of base hours added per extra language.
const LANGUAGE_SHARE: f64 = 0.12;

/// Share of base hours added by the accessibility pass.
const ACCESSIBILITY_SHARE: f64 = 0.12;

/// Share of base hours added by the performance pass.
const PERFORMANCE_SHARE: f64 = 0.10;

/// Derive the hour breakdown from an estimate configuration.
///
/// Pure and total: negative inputs are expected to be prevented by the
/// caller, not validated here.
pub fn derive_hours(config: &EstimateConfig) -> HoursBreakdown {
    let complexity = config.project.complexity;
    let base = config.project.base_hours * complexity;

    // First page is covered by the base hours
    let extra_pages = (config.project.page_count - 1.0).max(0.0);
    let pages = extra_pages * HOURS_PER_EXTRA_PAGE * complexity;

    let features = &config.features;
    let design = base * (features.design.coefficient() - 1.0);
    let cms = base * features.cms.coefficient();
    let eshop = base * features.eshop.coefficient();
    let seo = base * features.seo.coefficient();

    let languages = if features.languages > 1 {
        base * LANGUAGE_SHARE * f64::from(features.languages - 1)
    } else {
        0.0
    };

    let accessibility = if features.accessibility {
        base * ACCESSIBILITY_SHARE
    } else {
        0.0
    };

    let performance = if features.performance {
        base * PERFORMANCE_SHARE
    } else {
        0.0
    };

    let custom: f64 = parse_features(&features.custom)
        .iter()
        .map(|f| f.hours)
        .sum();

    let total = base
        + pages
        + design
        + cms
        + eshop
        + seo
        + languages
        + accessibility
        + performance
        + custom;

    HoursBreakdown {
        base,
        pages,
        design,
        cms,
        eshop,
        seo,
        languages,
        accessibility,
        performance,
        custom,
        total,
    }
}
