//! Single-opportunity analysis: runs every scoring stage and merges the
//! results into one [`OpportunityAnalysis`].

use std::sync::Arc;

use crate::application::action::determine_optimal_action;
use crate::application::confidence::calculate_analysis_confidence;
use crate::application::insights::generate_insights;
use crate::application::pricing::calculate_optimal_pricing;
use crate::application::threat::assess_competitive_threat;
use crate::application::win_probability::calculate_win_probability;
use crate::domain::entities::analysis::OpportunityAnalysis;
use crate::domain::entities::opportunity::Opportunity;
use crate::domain::ports::clock::Clock;

pub struct AnalyzeOpportunityUseCase {
    clock: Arc<dyn Clock>,
}

impl AnalyzeOpportunityUseCase {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn execute(&self, opportunity: &Opportunity) -> OpportunityAnalysis {
        let now = self.clock.now();

        let win_probability = calculate_win_probability(opportunity);
        let competitive_threat = assess_competitive_threat(opportunity, now);
        let recommended_action =
            determine_optimal_action(opportunity, win_probability, competitive_threat);
        let optimal_pricing = calculate_optimal_pricing(opportunity, win_probability);
        let insights = generate_insights(opportunity, win_probability, now);
        let confidence_level = calculate_analysis_confidence(opportunity);

        tracing::debug!(
            opportunity_id = %opportunity.id,
            win_probability,
            threat = %competitive_threat,
            action = %recommended_action,
            "analyzed opportunity"
        );

        OpportunityAnalysis {
            opportunity_id: opportunity.id.clone(),
            win_probability,
            competitive_threat,
            recommended_action,
            risk_factors: insights.risk_factors,
            advantages: insights.advantages,
            optimal_pricing,
            strategic_insights: insights.strategic_insights,
            confidence_level,
        }
    }
}
