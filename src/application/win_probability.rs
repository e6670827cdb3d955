//! Win-probability estimation.
//!
//! Additive model over four weighted factor tables, followed by a
//! multiplicative penalty for the dominant competitor and two flat bonuses:
//!
//! ```text
//! p = 0.5 + g·Wg + c·Wc + u·Wu + r·Wr
//! p = p × 0.3            (dominant competitor bidding)
//! p = p + 0.15           (complex / custom solution)
//! p = p + 0.20           (order below 20 000)
//! p = clamp(p, 0.05, 0.95)
//! ```

use crate::domain::entities::opportunity::Opportunity;
use crate::domain::values::customer_grade::CustomerGrade;
use crate::domain::values::product_category::ProductCategory;
use crate::domain::values::urgency::Urgency;
use crate::domain::values::weights::*;

pub fn customer_grade_factor(grade: CustomerGrade) -> f64 {
    match grade {
        CustomerGrade::A => 0.3744,
        CustomerGrade::B => 0.2872,
        CustomerGrade::C => 0.0,
        CustomerGrade::D => -0.3385,
        CustomerGrade::Unknown => 0.0,
    }
}

pub fn product_advantage_factor(category: ProductCategory) -> f64 {
    match category {
        ProductCategory::GasAnalyzers => 0.25,
        ProductCategory::FlowMeters => -0.10,
        ProductCategory::LevelMeters => 0.05,
        ProductCategory::ElectricityMeters => 0.15,
        ProductCategory::Instruments => 0.10,
        ProductCategory::Unknown => 0.0,
    }
}

pub fn urgency_factor(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::Emergency => 0.35,
        Urgency::High => 0.20,
        Urgency::Medium => 0.05,
        Urgency::Low => -0.05,
        Urgency::Unknown => 0.0,
    }
}

pub fn relationship_factor(years: f64) -> f64 {
    if years >= 5.0 {
        0.25
    } else if years >= 2.0 {
        0.15
    } else if years >= 1.0 {
        0.10
    } else {
        0.05
    }
}

/// Estimated probability of winning the bid, always within
/// [`MIN_WIN_PROBABILITY`, `MAX_WIN_PROBABILITY`].
pub fn calculate_win_probability(opportunity: &Opportunity) -> f64 {
    let mut probability = BASE_PROBABILITY;

    probability += customer_grade_factor(opportunity.customer_grade) * CUSTOMER_GRADE_WEIGHT;
    probability += product_advantage_factor(opportunity.category) * PRODUCT_CATEGORY_WEIGHT;
    probability += urgency_factor(opportunity.urgency_level) * URGENCY_WEIGHT;
    probability += relationship_factor(opportunity.relationship_years) * RELATIONSHIP_WEIGHT;

    // Applied to the weighted sum only, never to the flat bonuses below.
    if opportunity.dominant_competitor_present {
        probability *= DOMINANT_COMPETITOR_MULTIPLIER;
    }

    if opportunity.complexity.is_engineered() {
        probability += ENGINEERED_SOLUTION_BONUS;
    }

    if opportunity.estimated_value < SMALL_ORDER_THRESHOLD {
        probability += SMALL_ORDER_BONUS;
    }

    if probability.is_nan() {
        return MIN_WIN_PROBABILITY;
    }
    probability.clamp(MIN_WIN_PROBABILITY, MAX_WIN_PROBABILITY)
}
