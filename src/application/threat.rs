//! Competitive threat classification.

use crate::domain::entities::opportunity::Opportunity;
use crate::domain::values::threat_level::ThreatLevel;
use crate::domain::values::weights::{
    HIGH_VALUE_THRESHOLD, LONG_DECISION_WEEKS, VERY_HIGH_VALUE_THRESHOLD,
};
use chrono::{DateTime, Utc};

/// Threat score in tenths (0.1 units), so thresholds compare exactly.
fn threat_score_tenths(opportunity: &Opportunity, now: DateTime<Utc>) -> u32 {
    let mut score = 0;

    let competitors = opportunity.competitor_count();
    if competitors > 3 {
        score += 3;
    } else if competitors > 1 {
        score += 2;
    }

    if opportunity.estimated_value > VERY_HIGH_VALUE_THRESHOLD {
        score += 3;
    } else if opportunity.estimated_value > HIGH_VALUE_THRESHOLD {
        score += 2;
    }

    if opportunity.complexity.is_commodity() {
        score += 2;
    }

    if opportunity.weeks_to_decision(now) > LONG_DECISION_WEEKS {
        score += 2;
    }

    score
}

/// CRITICAL whenever the dominant competitor bids; otherwise scored.
pub fn assess_competitive_threat(opportunity: &Opportunity, now: DateTime<Utc>) -> ThreatLevel {
    if opportunity.dominant_competitor_present {
        return ThreatLevel::Critical;
    }

    match threat_score_tenths(opportunity, now) {
        s if s >= 6 => ThreatLevel::High,
        s if s >= 4 => ThreatLevel::Medium,
        _ => ThreatLevel::Low,
    }
}
