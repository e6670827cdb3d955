//! JSON loading for opportunities handed over by the quotation workflow.
//!
//! Records are validated here so the engine only ever sees well-formed input.

use crate::domain::entities::opportunity::Opportunity;
use crate::domain::error::DomainError;
use std::path::Path;

/// Parse and validate a single opportunity.
pub fn parse_opportunity(json: &str) -> Result<Opportunity, DomainError> {
    let opportunity: Opportunity = serde_json::from_str(json)?;
    opportunity.validate()?;
    Ok(opportunity)
}

/// Parse and validate a JSON array of opportunities.
pub fn parse_opportunities(json: &str) -> Result<Vec<Opportunity>, DomainError> {
    let opportunities: Vec<Opportunity> = serde_json::from_str(json)?;
    for opportunity in &opportunities {
        opportunity.validate()?;
    }
    Ok(opportunities)
}

/// Read a JSON array of opportunities from disk.
pub fn load_opportunities(path: &Path) -> Result<Vec<Opportunity>, DomainError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Io(format!("{}: {e}", path.display())))?;
    let opportunities = parse_opportunities(&raw)?;
    tracing::debug!(path = %path.display(), count = opportunities.len(), "loaded opportunities");
    Ok(opportunities)
}
