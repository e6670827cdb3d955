use crate::domain::error::DomainError;
use crate::domain::values::complexity::Complexity;
use crate::domain::values::customer_grade::CustomerGrade;
use crate::domain::values::product_category::ProductCategory;
use crate::domain::values::urgency::Urgency;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A prospective sale handed over by the quotation workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    #[serde(default = "generate_id")]
    pub id: String,
    pub customer_grade: CustomerGrade,
    pub category: ProductCategory,
    #[serde(default)]
    pub brand: String,
    /// Free-form product description, e.g. "Endress+Hauser Flow Meters".
    #[serde(default)]
    pub product_type: String,
    pub estimated_value: f64,
    pub urgency_level: Urgency,
    #[serde(default)]
    pub relationship_years: f64,
    #[serde(default)]
    pub competitors: Vec<String>,
    /// Whether the dominant competitor (ABB) is bidding.
    #[serde(default)]
    pub dominant_competitor_present: bool,
    #[serde(default = "default_complexity")]
    pub complexity: Complexity,
    pub response_deadline: DateTime<Utc>,
    pub expected_decision_date: DateTime<Utc>,
    #[serde(default)]
    pub urgent_delivery: bool,
}

fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn default_complexity() -> Complexity {
    Complexity::Unknown
}

impl Opportunity {
    /// New opportunity with no named competitors, a two-week response
    /// deadline and a four-week decision horizon.
    pub fn new(
        id: impl Into<String>,
        customer_grade: CustomerGrade,
        category: ProductCategory,
        estimated_value: f64,
        urgency_level: Urgency,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            customer_grade,
            category,
            brand: String::new(),
            product_type: String::new(),
            estimated_value,
            urgency_level,
            relationship_years: 0.0,
            competitors: Vec::new(),
            dominant_competitor_present: false,
            complexity: Complexity::Standard,
            response_deadline: now + Duration::weeks(2),
            expected_decision_date: now + Duration::weeks(4),
            urgent_delivery: false,
        }
    }

    /// Reject records the engine cannot score meaningfully.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidInput("Opportunity id must not be empty".into()));
        }
        if !self.estimated_value.is_finite() || self.estimated_value < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "Opportunity {}: estimated_value must be a non-negative number, got {}",
                self.id, self.estimated_value
            )));
        }
        if !self.relationship_years.is_finite() || self.relationship_years < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "Opportunity {}: relationship_years must be a non-negative number, got {}",
                self.id, self.relationship_years
            )));
        }
        Ok(())
    }

    /// Weeks from `now` until the expected decision date (negative if past).
    pub fn weeks_to_decision(&self, now: DateTime<Utc>) -> f64 {
        let millis = (self.expected_decision_date - now).num_milliseconds() as f64;
        millis / Duration::weeks(1).num_milliseconds() as f64
    }

    pub fn competitor_count(&self) -> usize {
        self.competitors.len()
    }
}
