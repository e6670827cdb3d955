//! Built-in demonstration opportunities, timed relative to `now`.

use crate::domain::entities::opportunity::Opportunity;
use crate::domain::values::complexity::Complexity;
use crate::domain::values::customer_grade::CustomerGrade;
use crate::domain::values::product_category::ProductCategory;
use crate::domain::values::urgency::Urgency;
use chrono::{DateTime, Duration, Utc};

struct DemoSeed {
    id: &'static str,
    grade: CustomerGrade,
    product_type: &'static str,
    value: f64,
    urgency: Urgency,
    years: f64,
    competitors: &'static [&'static str],
    dominant: bool,
    category: ProductCategory,
    brand: &'static str,
    complexity: Complexity,
    deadline_days: i64,
    decision_days: i64,
    urgent_delivery: bool,
}

const DEMO_SEEDS: &[DemoSeed] = &[
    DemoSeed {
        id: "OPP-2025-001",
        grade: CustomerGrade::A,
        product_type: "Endress+Hauser Flow Meters",
        value: 45_000.0,
        urgency: Urgency::High,
        years: 5.2,
        competitors: &["Schneider Electric", "Local Distributor"],
        dominant: false,
        category: ProductCategory::FlowMeters,
        brand: "Endress+Hauser",
        complexity: Complexity::Standard,
        deadline_days: 7,
        decision_days: 21,
        urgent_delivery: true,
    },
    DemoSeed {
        id: "OPP-2025-002",
        grade: CustomerGrade::B,
        product_type: "ABB Flow Measurement System",
        value: 125_000.0,
        urgency: Urgency::Medium,
        years: 2.1,
        competitors: &["ABB", "Siemens", "Schneider Electric"],
        dominant: true,
        category: ProductCategory::FlowMeters,
        brand: "ABB",
        complexity: Complexity::Complex,
        deadline_days: 14,
        decision_days: 42,
        urgent_delivery: false,
    },
    DemoSeed {
        id: "OPP-2025-003",
        grade: CustomerGrade::A,
        product_type: "Servomex Gas Analyzer",
        value: 28_000.0,
        urgency: Urgency::Emergency,
        years: 7.5,
        competitors: &["Local Technical Services"],
        dominant: false,
        category: ProductCategory::GasAnalyzers,
        brand: "Servomex",
        complexity: Complexity::Complex,
        deadline_days: 2,
        decision_days: 7,
        urgent_delivery: true,
    },
    DemoSeed {
        id: "OPP-2025-004",
        grade: CustomerGrade::C,
        product_type: "GIC General Instruments",
        value: 15_000.0,
        urgency: Urgency::Low,
        years: 0.8,
        competitors: &["Multiple Local Suppliers"],
        dominant: false,
        category: ProductCategory::Instruments,
        brand: "GIC",
        complexity: Complexity::Simple,
        deadline_days: 21,
        decision_days: 60,
        urgent_delivery: false,
    },
    DemoSeed {
        id: "OPP-2025-005",
        grade: CustomerGrade::D,
        product_type: "Endress+Hauser Level Measurement",
        value: 85_000.0,
        urgency: Urgency::Medium,
        years: 1.2,
        competitors: &["ABB", "Siemens", "Multiple Others"],
        dominant: true,
        category: ProductCategory::LevelMeters,
        brand: "Endress+Hauser",
        complexity: Complexity::Standard,
        deadline_days: 10,
        decision_days: 35,
        urgent_delivery: false,
    },
];

pub fn demo_opportunities(now: DateTime<Utc>) -> Vec<Opportunity> {
    DEMO_SEEDS
        .iter()
        .map(|s| Opportunity {
            id: s.id.to_string(),
            customer_grade: s.grade,
            category: s.category,
            brand: s.brand.to_string(),
            product_type: s.product_type.to_string(),
            estimated_value: s.value,
            urgency_level: s.urgency,
            relationship_years: s.years,
            competitors: s.competitors.iter().map(|c| c.to_string()).collect(),
            dominant_competitor_present: s.dominant,
            complexity: s.complexity,
            response_deadline: now + Duration::days(s.deadline_days),
            expected_decision_date: now + Duration::days(s.decision_days),
            urgent_delivery: s.urgent_delivery,
        })
        .collect()
}
