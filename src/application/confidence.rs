//! Confidence in the analysis itself: more known inputs, more confidence.

use crate::domain::entities::opportunity::Opportunity;

const BASE_CONFIDENCE: f64 = 0.7;
const MAX_CONFIDENCE: f64 = 0.95;

pub fn calculate_analysis_confidence(opportunity: &Opportunity) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if opportunity.relationship_years > 0.0 {
        confidence += 0.1;
    }
    if opportunity.customer_grade.is_known() {
        confidence += 0.1;
    }
    if !opportunity.competitors.is_empty() {
        confidence += 0.1;
    }

    // A clear competitive picture is easier to call.
    if opportunity.dominant_competitor_present {
        confidence += 0.1;
    }
    if opportunity.urgency_level.is_emergency() {
        confidence += 0.05;
    }

    confidence.clamp(0.0, MAX_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::customer_grade::CustomerGrade;
    use crate::domain::values::product_category::ProductCategory;
    use crate::domain::values::urgency::Urgency;

    #[test]
    fn test_sparse_input_keeps_base() {
        let o = Opportunity::new(
            "T-1",
            CustomerGrade::Unknown,
            ProductCategory::Unknown,
            1_000.0,
            Urgency::Low,
        );
        assert!((calculate_analysis_confidence(&o) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_known_grade_adds_confidence() {
        let o = Opportunity::new("T-1", CustomerGrade::C, ProductCategory::Unknown, 1_000.0, Urgency::Low);
        assert!((calculate_analysis_confidence(&o) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_capped() {
        let mut o = Opportunity::new(
            "T-1",
            CustomerGrade::A,
            ProductCategory::GasAnalyzers,
            1_000.0,
            Urgency::Emergency,
        );
        o.relationship_years = 2.0;
        o.competitors = vec!["ABB".into()];
        o.dominant_competitor_present = true;
        assert_eq!(calculate_analysis_confidence(&o), MAX_CONFIDENCE);
    }
}
