//! Rule table for human-readable risk factors, advantages and strategy notes.
//!
//! Every rule is evaluated independently; each match appends its message to
//! its target list in declaration order. Downstream consumers match on the
//! message text, so the strings are part of the public contract.

use crate::domain::entities::opportunity::Opportunity;
use crate::domain::values::customer_grade::CustomerGrade;
use crate::domain::values::complexity::Complexity;
use crate::domain::values::product_category::ProductCategory;
use crate::domain::values::weights::{LONG_DECISION_WEEKS, SMALL_ORDER_THRESHOLD};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Which list a rule contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    RiskFactor,
    Advantage,
    StrategicInsight,
}

/// Everything a rule predicate may look at.
pub struct InsightContext<'a> {
    pub opportunity: &'a Opportunity,
    pub win_probability: f64,
    pub weeks_to_decision: f64,
}

impl<'a> InsightContext<'a> {
    pub fn new(opportunity: &'a Opportunity, win_probability: f64, now: DateTime<Utc>) -> Self {
        Self {
            opportunity,
            win_probability,
            weeks_to_decision: opportunity.weeks_to_decision(now),
        }
    }
}

pub struct InsightRule {
    pub kind: InsightKind,
    pub message: &'static str,
    pub applies: fn(&InsightContext<'_>) -> bool,
}

pub static INSIGHT_RULES: &[InsightRule] = &[
    // ── Risk factors ─────────────────────────────────────────────────────
    InsightRule {
        kind: InsightKind::RiskFactor,
        message: "ABB is competing - expect aggressive pricing below market rates",
        applies: |c| c.opportunity.dominant_competitor_present,
    },
    InsightRule {
        kind: InsightKind::RiskFactor,
        message: "High competition levels may drive margins to unsustainable levels",
        applies: |c| c.opportunity.competitor_count() > 3,
    },
    InsightRule {
        kind: InsightKind::RiskFactor,
        message: "Customer payment history indicates potential collection issues",
        applies: |c| {
            matches!(
                c.opportunity.customer_grade,
                CustomerGrade::C | CustomerGrade::D
            )
        },
    },
    InsightRule {
        kind: InsightKind::RiskFactor,
        message: "Flow meters above $30K typically targeted by ABB with loss-leader pricing",
        applies: |c| {
            c.opportunity.category == ProductCategory::FlowMeters
                && c.opportunity.estimated_value > 30_000.0
        },
    },
    InsightRule {
        kind: InsightKind::RiskFactor,
        message: "Simple products at high value attract maximum competitive pressure",
        applies: |c| {
            c.opportunity.complexity == Complexity::Simple
                && c.opportunity.estimated_value > 20_000.0
        },
    },
    InsightRule {
        kind: InsightKind::RiskFactor,
        message: "Long decision timeline allows competitors to develop aggressive strategies",
        applies: |c| c.weeks_to_decision > LONG_DECISION_WEEKS,
    },
    // ── Advantages ───────────────────────────────────────────────────────
    InsightRule {
        kind: InsightKind::Advantage,
        message: "Emergency timeline favors local responsiveness and immediate availability",
        applies: |c| c.opportunity.urgency_level.is_emergency(),
    },
    InsightRule {
        kind: InsightKind::Advantage,
        message: "Small order size below ABB minimum engagement threshold",
        applies: |c| c.opportunity.estimated_value < SMALL_ORDER_THRESHOLD,
    },
    InsightRule {
        kind: InsightKind::Advantage,
        message: "Complex solutions require technical expertise and local support",
        applies: |c| c.opportunity.complexity.is_engineered(),
    },
    InsightRule {
        kind: InsightKind::Advantage,
        message: "Established relationship provides trust advantage over new competitors",
        applies: |c| c.opportunity.relationship_years >= 3.0,
    },
    InsightRule {
        kind: InsightKind::Advantage,
        message: "Servomex specialization provides technical and service advantages",
        applies: |c| c.opportunity.category == ProductCategory::GasAnalyzers,
    },
    InsightRule {
        kind: InsightKind::Advantage,
        message: "Landis+Gyr and Iskraemeco partnerships offer competitive pricing",
        applies: |c| c.opportunity.category == ProductCategory::ElectricityMeters,
    },
    InsightRule {
        kind: InsightKind::Advantage,
        message: "Limited competition allows for optimal pricing and margin protection",
        applies: |c| {
            !c.opportunity.dominant_competitor_present && c.opportunity.competitor_count() <= 2
        },
    },
    // ── Strategic insights ───────────────────────────────────────────────
    InsightRule {
        kind: InsightKind::StrategicInsight,
        message: "Focus on service value, local support, and delivery speed rather than price competition",
        applies: |c| c.opportunity.dominant_competitor_present,
    },
    InsightRule {
        kind: InsightKind::StrategicInsight,
        message: "Consider proposing alternative products where ABB is weaker (e.g., Servomex gas analyzers)",
        applies: |c| c.opportunity.dominant_competitor_present,
    },
    InsightRule {
        kind: InsightKind::StrategicInsight,
        message: "Strong position allows for premium pricing and margin protection",
        applies: |c| c.win_probability > 0.70,
    },
    InsightRule {
        kind: InsightKind::StrategicInsight,
        message: "Consider strategic no-bid or focus resources on higher probability opportunities",
        applies: |c| c.win_probability < 0.45,
    },
    InsightRule {
        kind: InsightKind::StrategicInsight,
        message: "Leverage long-term relationship for premium pricing and extended payment terms",
        applies: |c| {
            c.opportunity.customer_grade.is_best() && c.opportunity.relationship_years >= 3.0
        },
    },
    InsightRule {
        kind: InsightKind::StrategicInsight,
        message: "Emphasize Servomex technical superiority and specialized calibration services",
        applies: |c| c.opportunity.category == ProductCategory::GasAnalyzers,
    },
    InsightRule {
        kind: InsightKind::StrategicInsight,
        message: "Emergency timeline is significant advantage - price accordingly",
        applies: |c| c.opportunity.urgency_level.is_emergency(),
    },
    InsightRule {
        kind: InsightKind::StrategicInsight,
        message: "Small order size favors competitive pricing for relationship building",
        applies: |c| c.opportunity.estimated_value < 15_000.0,
    },
];

/// Messages grouped by target list, each in rule order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Insights {
    pub risk_factors: Vec<String>,
    pub advantages: Vec<String>,
    pub strategic_insights: Vec<String>,
}

/// Evaluate `rules` against `ctx`.
pub fn evaluate_rules(rules: &[InsightRule], ctx: &InsightContext<'_>) -> Insights {
    let mut out = Insights::default();
    for rule in rules.iter().filter(|r| (r.applies)(ctx)) {
        let list = match rule.kind {
            InsightKind::RiskFactor => &mut out.risk_factors,
            InsightKind::Advantage => &mut out.advantages,
            InsightKind::StrategicInsight => &mut out.strategic_insights,
        };
        list.push(rule.message.to_string());
    }
    out
}

/// Evaluate the built-in rule table.
pub fn generate_insights(
    opportunity: &Opportunity,
    win_probability: f64,
    now: DateTime<Utc>,
) -> Insights {
    let ctx = InsightContext::new(opportunity, win_probability, now);
    evaluate_rules(INSIGHT_RULES, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::urgency::Urgency;
    use chrono::Duration;

    fn opp(grade: CustomerGrade, category: ProductCategory, value: f64) -> Opportunity {
        Opportunity::new("T-1", grade, category, value, Urgency::Medium)
    }

    fn count(kind: InsightKind) -> usize {
        INSIGHT_RULES.iter().filter(|r| r.kind == kind).count()
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(count(InsightKind::RiskFactor), 6);
        assert_eq!(count(InsightKind::Advantage), 7);
        assert_eq!(count(InsightKind::StrategicInsight), 8);
    }

    #[test]
    fn test_dominant_competitor_rules() {
        let mut o = opp(CustomerGrade::B, ProductCategory::LevelMeters, 40_000.0);
        o.dominant_competitor_present = true;
        let out = generate_insights(&o, 0.5, Utc::now());

        assert_eq!(
            out.risk_factors,
            vec!["ABB is competing - expect aggressive pricing below market rates"]
        );
        assert_eq!(out.strategic_insights.len(), 2);
        assert!(out.strategic_insights[1].contains("Servomex gas analyzers"));
        assert!(!out
            .advantages
            .iter()
            .any(|a| a.starts_with("Limited competition")));
    }

    #[test]
    fn test_multiple_rules_fire_in_declaration_order() {
        let mut o = opp(CustomerGrade::D, ProductCategory::FlowMeters, 35_000.0);
        o.complexity = Complexity::Simple;
        o.competitors = vec!["Siemens".into(), "Yokogawa".into(), "Krohne".into(), "Emerson".into()];
        let now = Utc::now();
        o.expected_decision_date = now + Duration::weeks(10);

        let out = generate_insights(&o, 0.3, now);
        assert_eq!(
            out.risk_factors,
            vec![
                "High competition levels may drive margins to unsustainable levels",
                "Customer payment history indicates potential collection issues",
                "Flow meters above $30K typically targeted by ABB with loss-leader pricing",
                "Simple products at high value attract maximum competitive pressure",
                "Long decision timeline allows competitors to develop aggressive strategies",
            ]
        );
        assert!(out.advantages.is_empty());
        assert_eq!(
            out.strategic_insights,
            vec!["Consider strategic no-bid or focus resources on higher probability opportunities"]
        );
    }

    #[test]
    fn test_strong_gas_analyzer_opportunity() {
        let mut o = opp(CustomerGrade::A, ProductCategory::GasAnalyzers, 12_000.0);
        o.urgency_level = Urgency::Emergency;
        o.relationship_years = 4.0;
        o.complexity = Complexity::Custom;

        let out = generate_insights(&o, 0.95, Utc::now());
        assert!(out.risk_factors.is_empty());
        assert_eq!(
            out.advantages,
            vec![
                "Emergency timeline favors local responsiveness and immediate availability",
                "Small order size below ABB minimum engagement threshold",
                "Complex solutions require technical expertise and local support",
                "Established relationship provides trust advantage over new competitors",
                "Servomex specialization provides technical and service advantages",
                "Limited competition allows for optimal pricing and margin protection",
            ]
        );
        assert_eq!(
            out.strategic_insights,
            vec![
                "Strong position allows for premium pricing and margin protection",
                "Leverage long-term relationship for premium pricing and extended payment terms",
                "Emphasize Servomex technical superiority and specialized calibration services",
                "Emergency timeline is significant advantage - price accordingly",
                "Small order size favors competitive pricing for relationship building",
            ]
        );
    }

    #[test]
    fn test_electricity_meter_advantages() {
        let mut o = opp(CustomerGrade::B, ProductCategory::ElectricityMeters, 100_000.0);
        o.competitors = vec!["Siemens".into(), "Itron".into()];
        o.complexity = Complexity::Custom;

        let out = generate_insights(&o, 0.6, Utc::now());
        assert!(out.risk_factors.is_empty());
        assert_eq!(
            out.advantages,
            vec![
                "Complex solutions require technical expertise and local support",
                "Landis+Gyr and Iskraemeco partnerships offer competitive pricing",
                "Limited competition allows for optimal pricing and margin protection",
            ]
        );
        assert!(out.strategic_insights.is_empty());
    }

    #[test]
    fn test_order_size_and_competition_edges() {
        let mut o = opp(CustomerGrade::B, ProductCategory::Instruments, 15_000.0);
        o.competitors = vec!["Siemens".into(), "Yokogawa".into(), "Krohne".into()];

        let out = generate_insights(&o, 0.6, Utc::now());
        assert!(out.strategic_insights.is_empty());
        assert!(!out.advantages.iter().any(|a| a.starts_with("Limited competition")));
        assert!(out.risk_factors.is_empty());

        o.estimated_value = 14_999.0;
        let out = generate_insights(&o, 0.6, Utc::now());
        assert_eq!(
            out.strategic_insights,
            vec!["Small order size favors competitive pricing for relationship building"]
        );
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = [InsightRule {
            kind: InsightKind::Advantage,
            message: "Urgent delivery requested",
            applies: |c| c.opportunity.urgent_delivery,
        }];
        let mut o = opp(CustomerGrade::B, ProductCategory::Instruments, 40_000.0);
        let ctx = InsightContext::new(&o, 0.5, Utc::now());
        assert!(evaluate_rules(&rules, &ctx).advantages.is_empty());

        o.urgent_delivery = true;
        let ctx = InsightContext::new(&o, 0.5, Utc::now());
        assert_eq!(evaluate_rules(&rules, &ctx).advantages, vec!["Urgent delivery requested"]);
    }
}
