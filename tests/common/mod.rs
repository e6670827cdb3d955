//! Shared test helpers.
#![allow(dead_code)]

use bidintel::domain::entities::opportunity::Opportunity;
use bidintel::domain::values::complexity::Complexity;
use bidintel::domain::values::customer_grade::CustomerGrade;
use bidintel::domain::values::product_category::ProductCategory;
use bidintel::domain::values::urgency::Urgency;
use bidintel::infrastructure::clock::FixedClock;
use bidintel::BidIntel;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap()
}

pub fn setup() -> BidIntel {
    BidIntel::with_clock(Arc::new(FixedClock(now())))
}

/// Opportunity with a one-week deadline and a three-week decision horizon.
pub fn make_opportunity(
    id: &str,
    grade: CustomerGrade,
    category: ProductCategory,
    value: f64,
    urgency: Urgency,
) -> Opportunity {
    let mut opp = Opportunity::new(id, grade, category, value, urgency);
    opp.complexity = Complexity::Standard;
    opp.response_deadline = now() + Duration::weeks(1);
    opp.expected_decision_date = now() + Duration::weeks(3);
    opp
}

pub const GRADES: [CustomerGrade; 5] = [
    CustomerGrade::A,
    CustomerGrade::B,
    CustomerGrade::C,
    CustomerGrade::D,
    CustomerGrade::Unknown,
];

pub const CATEGORIES: [ProductCategory; 6] = [
    ProductCategory::GasAnalyzers,
    ProductCategory::FlowMeters,
    ProductCategory::LevelMeters,
    ProductCategory::ElectricityMeters,
    ProductCategory::Instruments,
    ProductCategory::Unknown,
];

pub const URGENCIES: [Urgency; 5] = [
    Urgency::Low,
    Urgency::Medium,
    Urgency::High,
    Urgency::Emergency,
    Urgency::Unknown,
];

pub const COMPLEXITIES: [Complexity; 5] = [
    Complexity::Simple,
    Complexity::Standard,
    Complexity::Complex,
    Complexity::Custom,
    Complexity::Unknown,
];

/// A broad grid of opportunities covering every enum value and the
/// value / relationship / competitor thresholds.
pub fn opportunity_grid() -> Vec<Opportunity> {
    let mut out = Vec::new();
    let mut n = 0;
    for grade in GRADES {
        for category in CATEGORIES {
            for urgency in URGENCIES {
                for (i, complexity) in COMPLEXITIES.into_iter().enumerate() {
                    for dominant in [false, true] {
                        for value in [0.0, 14_999.0, 20_000.0, 50_001.0, 250_000.0] {
                            n += 1;
                            let mut opp =
                                make_opportunity(&format!("G-{n}"), grade, category, value, urgency);
                            opp.complexity = complexity;
                            opp.dominant_competitor_present = dominant;
                            opp.relationship_years = [0.0, 1.5, 3.0, 6.0, 60.0][i];
                            opp.competitors = (0..i).map(|c| format!("Rival {c}")).collect();
                            opp.expected_decision_date = now() + Duration::weeks(3 * i as i64);
                            out.push(opp);
                        }
                    }
                }
            }
        }
    }
    out
}
