use crate::domain::values::bid_action::BidAction;
use crate::domain::values::pricing_band::PricingBand;
use crate::domain::values::threat_level::ThreatLevel;
use serde::{Deserialize, Serialize};

/// Full scoring result for one opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityAnalysis {
    pub opportunity_id: String,
    /// Always within [0.05, 0.95].
    pub win_probability: f64,
    pub competitive_threat: ThreatLevel,
    pub recommended_action: BidAction,
    pub risk_factors: Vec<String>,
    pub advantages: Vec<String>,
    pub optimal_pricing: PricingBand,
    pub strategic_insights: Vec<String>,
    /// Always within [0.0, 0.95].
    pub confidence_level: f64,
}
