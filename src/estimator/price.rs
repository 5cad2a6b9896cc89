use serde::Serialize;

use crate::config::EstimateConfig;
use crate::estimator::hours::HoursBreakdown;

/// Monetary breakdown in the selected currency. All amounts are
/// non-negative; the discount is rendered as a negative line by the
/// presentation layer. No rounding happens here.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PriceBreakdown {
    /// Hourly rate converted into the selected currency.
    pub rate: f64,
    pub subtotal: f64,
    pub rush_amount: f64,
    pub discount_amount: f64,
    /// Non-recurring total before tax, clamped at zero.
    pub one_off: f64,
    /// Recurring maintenance + hosting, unaffected by tax/discount/rush.
    pub monthly: f64,
    pub vat_amount: f64,
    pub total: f64,
}

/// Derive the price breakdown from an hour breakdown and the rate and
/// adjustment fields of the configuration.
pub fn derive_price(hours: &HoursBreakdown, config: &EstimateConfig) -> PriceBreakdown {
    let factor = config.rates.currency.factor();
    let rate = config.rates.hourly_rate * factor;
    let subtotal = hours.total * rate;

    let adjustments = &config.adjustments;
    let rush_amount = subtotal * adjustments.rush_percent / 100.0;
    let discount_amount = subtotal * adjustments.discount_percent / 100.0;

    // A large discount never drives the one-off cost below zero
    let one_off = (subtotal + rush_amount - discount_amount).max(0.0);

    let monthly =
        (config.recurring.maintenance_monthly + config.recurring.hosting_monthly) * factor;

    let vat_amount = if adjustments.vat_percent > 0.0 {
        one_off * adjustments.vat_percent / 100.0
    } else {
        0.0
    };

    let total = one_off + vat_amount;

    PriceBreakdown {
        rate,
        subtotal,
        rush_amount,
        discount_amount,
        one_off,
        monthly,
        vat_amount,
        total,
    }
}
