mod features;
mod hours;
mod price;

pub use features::{parse_features, CustomFeature};
pub use hours::{derive_hours, HoursBreakdown};
pub use price::{derive_price, PriceBreakdown};
