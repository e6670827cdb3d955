pub mod bid_action;
pub mod complexity;
pub mod customer_grade;
pub mod pricing_band;
pub mod product_category;
pub mod threat_level;
pub mod urgency;
pub mod weights;
