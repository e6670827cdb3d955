//! Bid/no-bid decision table.

use crate::domain::entities::opportunity::Opportunity;
use crate::domain::values::bid_action::BidAction;
use crate::domain::values::threat_level::ThreatLevel;
use crate::domain::values::weights::{HIGH_VALUE_THRESHOLD, MIN_VIABLE_WIN_RATE};

/// First matching row wins.
pub fn determine_optimal_action(
    opportunity: &Opportunity,
    win_probability: f64,
    threat: ThreatLevel,
) -> BidAction {
    // Never take on the dominant competitor for large deals.
    if opportunity.dominant_competitor_present
        && opportunity.estimated_value > HIGH_VALUE_THRESHOLD
    {
        return BidAction::DoNotBid;
    }

    if win_probability < MIN_VIABLE_WIN_RATE {
        return BidAction::DoNotBid;
    }

    if win_probability > 0.75 && opportunity.customer_grade.is_best() {
        return BidAction::PricePremium;
    }

    if win_probability > 0.60 || opportunity.urgency_level.is_emergency() {
        return BidAction::BidAggressively;
    }

    if threat.is_severe() {
        return BidAction::BidCautiously;
    }

    BidAction::BidCautiously
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::customer_grade::CustomerGrade;
    use crate::domain::values::product_category::ProductCategory;
    use crate::domain::values::urgency::Urgency;

    fn opp(grade: CustomerGrade, value: f64, urgency: Urgency) -> Opportunity {
        Opportunity::new("T-1", grade, ProductCategory::Instruments, value, urgency)
    }

    #[test]
    fn test_large_dominant_deal_is_never_bid() {
        let mut o = opp(CustomerGrade::A, 50_001.0, Urgency::Emergency);
        o.dominant_competitor_present = true;
        assert_eq!(
            determine_optimal_action(&o, 0.95, ThreatLevel::Critical),
            BidAction::DoNotBid
        );
    }

    #[test]
    fn test_small_dominant_deal_falls_through() {
        let mut o = opp(CustomerGrade::B, 50_000.0, Urgency::Emergency);
        o.dominant_competitor_present = true;
        assert_eq!(
            determine_optimal_action(&o, 0.45, ThreatLevel::Critical),
            BidAction::BidAggressively
        );
    }

    #[test]
    fn test_below_viable_rate_is_never_bid() {
        let o = opp(CustomerGrade::A, 1_000.0, Urgency::Emergency);
        assert_eq!(
            determine_optimal_action(&o, 0.399, ThreatLevel::Low),
            BidAction::DoNotBid
        );
    }

    #[test]
    fn test_premium_requires_best_grade() {
        let a = opp(CustomerGrade::A, 30_000.0, Urgency::Low);
        let b = opp(CustomerGrade::B, 30_000.0, Urgency::Low);
        assert_eq!(
            determine_optimal_action(&a, 0.80, ThreatLevel::Low),
            BidAction::PricePremium
        );
        assert_eq!(
            determine_optimal_action(&b, 0.80, ThreatLevel::Low),
            BidAction::BidAggressively
        );
    }

    #[test]
    fn test_emergency_bids_aggressively() {
        let o = opp(CustomerGrade::C, 30_000.0, Urgency::Emergency);
        assert_eq!(
            determine_optimal_action(&o, 0.45, ThreatLevel::High),
            BidAction::BidAggressively
        );
    }

    #[test]
    fn test_default_is_cautious() {
        let o = opp(CustomerGrade::C, 30_000.0, Urgency::Medium);
        assert_eq!(
            determine_optimal_action(&o, 0.55, ThreatLevel::Low),
            BidAction::BidCautiously
        );
        assert_eq!(
            determine_optimal_action(&o, 0.55, ThreatLevel::High),
            BidAction::BidCautiously
        );
    }
}
