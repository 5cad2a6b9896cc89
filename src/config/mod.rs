mod estimate;

pub use estimate::{
    AdjustmentSettings, CmsTier, Currency, DesignTier, EshopTier, EstimateConfig, FeatureSettings,
    ProjectSettings, RateSettings, RecurringSettings, SeoTier,
};

use crate::error::{EstimateError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.sitequote/)
pub fn config_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "sitequote") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.sitequote/
    let home = dirs_home().ok_or_else(|| {
        EstimateError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".sitequote"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Load estimate.toml from the config directory
pub fn load_estimate(config_dir: &Path) -> Result<EstimateConfig> {
    let path = config_dir.join("estimate.toml");
    if !path.exists() {
        return Err(EstimateError::EstimateFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| EstimateError::EstimateParse { path, source: e })
}

/// Template content for estimate.toml
pub const ESTIMATE_TEMPLATE: &str = r#"[project]
base_hours = 20.0    # hours for a one-page baseline build
page_count = 5.0     # first page is included in base_hours
complexity = 1.0     # 0.8 (simple) .. 1.8 (very complex)

[rates]
currency = "eur"     # eur | usd | gbp | czk | pln
hourly_rate = 35.0   # EUR per hour, converted via fixed factors

[features]
design = "basic"     # basic | custom | premium
cms = "none"         # none | wp | headless
eshop = "none"       # none | simple | advanced
seo = "none"         # none | basic | pro
languages = 1
accessibility = false
performance = false
# Extra work as "name:hours" lines, comma or newline separated.
# Malformed or non-positive lines are ignored.
custom = """
"""

[recurring]
maintenance_monthly = 0.0
hosting_monthly = 0.0

[adjustments]
rush_percent = 0.0
discount_percent = 0.0
vat_percent = 0.0
"#;
