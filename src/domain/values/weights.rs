//! Weighting constants for opportunity scoring.
//!
//! Each factor table (grade, category, urgency, relationship) yields a raw
//! adjustment that is scaled by its weight before being added to the base
//! probability. The four weights sum to ~1.0.

/// Starting win probability before any factor is applied.
pub const BASE_PROBABILITY: f64 = 0.5;

pub const CUSTOMER_GRADE_WEIGHT: f64 = 0.3385;
pub const PRODUCT_CATEGORY_WEIGHT: f64 = 0.2872;
pub const URGENCY_WEIGHT: f64 = 0.1872;
pub const RELATIONSHIP_WEIGHT: f64 = 0.1871;

/// Multiplier applied to the running probability when the dominant competitor bids.
pub const DOMINANT_COMPETITOR_MULTIPLIER: f64 = 0.3;

/// Flat bonus for complex or custom solutions.
pub const ENGINEERED_SOLUTION_BONUS: f64 = 0.15;

/// Orders below this value are under the dominant competitor's engagement threshold.
pub const SMALL_ORDER_THRESHOLD: f64 = 20_000.0;
pub const SMALL_ORDER_BONUS: f64 = 0.20;

pub const MIN_WIN_PROBABILITY: f64 = 0.05;
pub const MAX_WIN_PROBABILITY: f64 = 0.95;

/// Below this win probability the engine never recommends bidding.
pub const MIN_VIABLE_WIN_RATE: f64 = 0.40;

/// Default minimum margin.
pub const MIN_MARGIN_THRESHOLD: f64 = 0.10;
/// Target margin; also the cost-basis assumption for the maximum bid.
pub const PREFERRED_MARGIN_TARGET: f64 = 0.18;

/// Values above this count as high-value opportunities.
pub const HIGH_VALUE_THRESHOLD: f64 = 50_000.0;
/// Values above this are "very large" for threat scoring.
pub const VERY_HIGH_VALUE_THRESHOLD: f64 = 100_000.0;

/// Decision horizons longer than this give competitors time to organise.
pub const LONG_DECISION_WEEKS: f64 = 8.0;

/// Share of dominant-competitor opportunities above which the portfolio is flagged.
pub const DOMINANT_SHARE_WARNING: f64 = 0.4;
/// Portfolio average win probability below which the portfolio is flagged.
pub const PORTFOLIO_TARGET_WIN_PROBABILITY: f64 = 0.5;
