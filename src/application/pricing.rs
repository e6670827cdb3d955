//! Pricing band derivation.
//!
//! A base (discount, margin) pair is chosen from the competitive position,
//! then adjusted for customer grade and urgency. The maximum bid assumes the
//! cost basis implied by the preferred margin target:
//!
//! ```text
//! cost    = value × (1 − 0.18)
//! max_bid = cost / (1 − minimum_margin)
//! ```

use crate::domain::entities::opportunity::Opportunity;
use crate::domain::values::pricing_band::PricingBand;
use crate::domain::values::weights::{MIN_MARGIN_THRESHOLD, PREFERRED_MARGIN_TARGET};

/// Margin demanded from worst-grade customers to offset collection risk.
const HIGH_RISK_MARGIN: f64 = 0.20;
/// Margin accepted when fighting the dominant competitor.
const DOMINANT_COMPETITOR_MARGIN: f64 = 0.05;
const EMERGENCY_PREMIUM: f64 = 0.05;

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn calculate_optimal_pricing(opportunity: &Opportunity, win_probability: f64) -> PricingBand {
    let (mut discount, mut margin) = if opportunity.dominant_competitor_present {
        (0.12, DOMINANT_COMPETITOR_MARGIN)
    } else if win_probability < 0.5 {
        (0.08, MIN_MARGIN_THRESHOLD)
    } else if win_probability > 0.75 {
        (0.02, PREFERRED_MARGIN_TARGET)
    } else {
        (0.0, MIN_MARGIN_THRESHOLD)
    };

    if opportunity.customer_grade.is_best() {
        discount = (discount - 0.02_f64).max(0.0);
    }

    if opportunity.urgency_level.is_emergency() {
        discount = (discount - EMERGENCY_PREMIUM).max(0.0);
        margin += EMERGENCY_PREMIUM;
    }

    // Overrides everything above, urgency premium included.
    if opportunity.customer_grade.is_worst() {
        discount = 0.0;
        margin = HIGH_RISK_MARGIN;
    }

    let estimated_cost = opportunity.estimated_value * (1.0 - PREFERRED_MARGIN_TARGET);
    let max_bid_amount = estimated_cost / (1.0 - margin);

    PricingBand {
        suggested_discount: round_to_hundredths(discount),
        minimum_margin: round_to_hundredths(margin),
        max_bid_amount: max_bid_amount.round(),
    }
}
