pub mod action;
pub mod analyze;
pub mod confidence;
pub mod insights;
pub mod portfolio;
pub mod pricing;
pub mod threat;
pub mod win_probability;
