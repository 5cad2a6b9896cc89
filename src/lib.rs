pub mod config;
pub mod error;
pub mod estimator;
pub mod export;

pub use config::{Currency, EstimateConfig};
pub use error::{EstimateError, Result};
pub use estimator::{derive_hours, derive_price, parse_features, HoursBreakdown, PriceBreakdown};
