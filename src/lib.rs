pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::analyze::AnalyzeOpportunityUseCase;
use crate::application::portfolio::PortfolioUseCase;
use crate::domain::entities::analysis::OpportunityAnalysis;
use crate::domain::entities::competitor::CompetitorProfile;
use crate::domain::entities::opportunity::Opportunity;
use crate::domain::entities::portfolio_summary::PortfolioSummary;
use crate::domain::error::DomainError;
use crate::domain::ports::clock::Clock;
use crate::infrastructure::clock::{FixedClock, SystemClock};
use crate::infrastructure::config::Config;
use crate::infrastructure::reference::competitors;
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct BidIntel {
    clock: Arc<dyn Clock>,
    analyze_uc: Arc<AnalyzeOpportunityUseCase>,
    portfolio_uc: PortfolioUseCase,
}

impl BidIntel {
    /// Engine on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Engine configured from the environment (see [`Config::from_env`]).
    pub fn from_env() -> Result<Self, DomainError> {
        Ok(Self::from_config(&Config::from_env()?))
    }

    pub fn from_config(config: &Config) -> Self {
        match config.as_of {
            Some(as_of) => Self::with_clock(Arc::new(FixedClock(as_of))),
            None => Self::new(),
        }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let analyze_uc = Arc::new(AnalyzeOpportunityUseCase::new(clock.clone()));
        Self {
            clock,
            portfolio_uc: PortfolioUseCase::new(analyze_uc.clone()),
            analyze_uc,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn analyze_opportunity(&self, opportunity: &Opportunity) -> OpportunityAnalysis {
        self.analyze_uc.execute(opportunity)
    }

    pub fn analyze_opportunity_portfolio(&self, opportunities: &[Opportunity]) -> PortfolioSummary {
        self.portfolio_uc.execute(opportunities)
    }

    pub fn competitor_profiles(&self) -> &'static BTreeMap<String, CompetitorProfile> {
        competitors::competitor_profiles()
    }
}

impl Default for BidIntel {
    fn default() -> Self {
        Self::new()
    }
}
