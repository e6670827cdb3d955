pub mod analysis;
pub mod competitor;
pub mod opportunity;
pub mod portfolio_summary;
