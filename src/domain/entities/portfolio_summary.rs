use crate::domain::entities::analysis::OpportunityAnalysis;
use serde::Serialize;

/// Aggregate view over a set of analyzed opportunities.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_opportunities: usize,
    /// Opportunities whose action is anything but DO_NOT_BID.
    pub recommended_bids: usize,
    pub dominant_competitor_threats: usize,
    pub high_value_opportunities: usize,
    pub emergency_opportunities: usize,
    pub average_win_probability: f64,
    /// `average_win_probability` as a whole percentage.
    pub average_win_probability_pct: u32,
    pub portfolio_value: f64,
    pub weighted_win_rate: f64,
    /// `weighted_win_rate` as a whole percentage.
    pub weighted_win_rate_pct: u32,
    /// `portfolio_value × weighted_win_rate`.
    pub expected_value: f64,
    pub insights: Vec<String>,
    /// Per-opportunity analyses in input order.
    pub analyses: Vec<OpportunityAnalysis>,
}
