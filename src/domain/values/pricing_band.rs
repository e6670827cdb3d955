use serde::{Deserialize, Serialize};

/// Pricing guidance for a single bid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingBand {
    /// Fraction off list price, rounded to two decimals. Never negative.
    pub suggested_discount: f64,
    /// Lowest acceptable margin fraction, rounded to two decimals. Never negative.
    pub minimum_margin: f64,
    /// Highest sensible bid in whole currency units.
    pub max_bid_amount: f64,
}
