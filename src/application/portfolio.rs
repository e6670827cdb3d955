//! Portfolio analysis. Every opportunity is analyzed independently, then the
//! results are folded into aggregate statistics and portfolio-level insights.

use std::sync::Arc;

use rayon::prelude::*;

use crate::application::analyze::AnalyzeOpportunityUseCase;
use crate::domain::entities::analysis::OpportunityAnalysis;
use crate::domain::entities::opportunity::Opportunity;
use crate::domain::entities::portfolio_summary::PortfolioSummary;
use crate::domain::values::weights::{
    DOMINANT_SHARE_WARNING, HIGH_VALUE_THRESHOLD, PORTFOLIO_TARGET_WIN_PROBABILITY,
};

pub const DOMINANT_SHARE_INSIGHT: &str =
    "High ABB competition level - consider market segmentation strategy";
pub const LOW_WIN_RATE_INSIGHT: &str =
    "Overall win probability below target - refocus on core strengths";
pub const EMERGENCY_INSIGHT: &str =
    "Emergency opportunities available - prioritize for premium pricing";

pub struct PortfolioUseCase {
    analyzer: Arc<AnalyzeOpportunityUseCase>,
}

impl PortfolioUseCase {
    pub fn new(analyzer: Arc<AnalyzeOpportunityUseCase>) -> Self {
        Self { analyzer }
    }

    pub fn execute(&self, opportunities: &[Opportunity]) -> PortfolioSummary {
        let analyses: Vec<OpportunityAnalysis> = opportunities
            .par_iter()
            .map(|o| self.analyzer.execute(o))
            .collect();

        let summary = summarize(opportunities, analyses);
        tracing::info!(
            total = summary.total_opportunities,
            recommended_bids = summary.recommended_bids,
            portfolio_value = summary.portfolio_value,
            expected_value = summary.expected_value,
            "portfolio analyzed"
        );
        summary
    }
}

/// Fold opportunities and their analyses (same order, same length) into a summary.
///
/// An empty portfolio yields all-zero statistics and no insights.
pub fn summarize(
    opportunities: &[Opportunity],
    analyses: Vec<OpportunityAnalysis>,
) -> PortfolioSummary {
    debug_assert_eq!(opportunities.len(), analyses.len());

    let total = opportunities.len();
    if total == 0 {
        return PortfolioSummary::default();
    }

    let recommended_bids = analyses
        .iter()
        .filter(|a| a.recommended_action.is_bid())
        .count();
    let dominant = opportunities
        .iter()
        .filter(|o| o.dominant_competitor_present)
        .count();
    let high_value = opportunities
        .iter()
        .filter(|o| o.estimated_value > HIGH_VALUE_THRESHOLD)
        .count();
    let emergency = opportunities
        .iter()
        .filter(|o| o.urgency_level.is_emergency())
        .count();

    let average_win_probability =
        analyses.iter().map(|a| a.win_probability).sum::<f64>() / total as f64;

    let portfolio_value: f64 = opportunities.iter().map(|o| o.estimated_value).sum();
    let weighted_win_rate = if portfolio_value > 0.0 {
        opportunities
            .iter()
            .zip(&analyses)
            .map(|(o, a)| a.win_probability * o.estimated_value)
            .sum::<f64>()
            / portfolio_value
    } else {
        0.0
    };

    let mut insights = Vec::new();
    if dominant as f64 / total as f64 > DOMINANT_SHARE_WARNING {
        insights.push(DOMINANT_SHARE_INSIGHT.to_string());
    }
    if average_win_probability < PORTFOLIO_TARGET_WIN_PROBABILITY {
        insights.push(LOW_WIN_RATE_INSIGHT.to_string());
    }
    if emergency > 0 {
        insights.push(EMERGENCY_INSIGHT.to_string());
    }

    PortfolioSummary {
        total_opportunities: total,
        recommended_bids,
        dominant_competitor_threats: dominant,
        high_value_opportunities: high_value,
        emergency_opportunities: emergency,
        average_win_probability,
        average_win_probability_pct: as_percent(average_win_probability),
        portfolio_value,
        weighted_win_rate,
        weighted_win_rate_pct: as_percent(weighted_win_rate),
        expected_value: portfolio_value * weighted_win_rate,
        insights,
        analyses,
    }
}

fn as_percent(rate: f64) -> u32 {
    (rate * 100.0).round().max(0.0) as u32
}
