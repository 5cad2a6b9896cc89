use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::EstimateConfig;
use crate::error::Result;
use crate::estimator::{derive_hours, derive_price, HoursBreakdown, PriceBreakdown};

/// Complete snapshot of one estimate: input configuration plus both
/// derived breakdowns.
#[derive(Debug, Serialize)]
pub struct ExportDocument {
    pub generated: String,
    pub config: EstimateConfig,
    pub hours: HoursBreakdown,
    pub price: PriceBreakdown,
}

impl ExportDocument {
    pub fn build(config: &EstimateConfig) -> Self {
        let hours = derive_hours(config);
        let price = derive_price(&hours, config);
        Self {
            generated: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            config: config.clone(),
            hours,
            price,
        }
    }
}

/// Default export filename, timestamped so repeated exports never clash.
pub fn export_filename() -> String {
    format!("ESTIMATE-{}.json", Local::now().format("%Y%m%d-%H%M%S"))
}

/// Serialize the estimate snapshot as pretty JSON to the given path.
/// One-shot synchronous write, no retry.
pub fn write_export(config: &EstimateConfig, path: &Path) -> Result<PathBuf> {
    let document = ExportDocument::build(config);
    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(path, json)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_config_and_breakdowns() {
        let mut config = EstimateConfig::default();
        config.project.base_hours = 10.0;
        config.project.page_count = 1.0;
        config.rates.hourly_rate = 50.0;

        let document = ExportDocument::build(&config);
        let json = serde_json::to_string(&document).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["config"]["rates"]["hourly_rate"], 50.0);
        assert_eq!(value["hours"]["total"], 10.0);
        assert_eq!(value["price"]["subtotal"], 500.0);
        assert!(value["generated"].is_string());
    }

    #[test]
    fn filename_is_timestamped_json() {
        let name = export_filename();
        assert!(name.starts_with("ESTIMATE-"));
        assert!(name.ends_with(".json"));
    }
}
