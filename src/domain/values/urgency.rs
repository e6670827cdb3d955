use serde::{Deserialize, Serialize};
use std::fmt;

/// How soon the customer needs the goods, ordered low to emergency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum Urgency {
    Unknown,
    Low,
    Medium,
    High,
    Emergency,
}

impl Urgency {
    pub fn is_emergency(&self) -> bool {
        matches!(self, Urgency::Emergency)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Low => write!(f, "LOW"),
            Urgency::Medium => write!(f, "MEDIUM"),
            Urgency::High => write!(f, "HIGH"),
            Urgency::Emergency => write!(f, "EMERGENCY"),
            Urgency::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl From<&str> for Urgency {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Urgency::Low,
            "medium" => Urgency::Medium,
            "high" => Urgency::High,
            "emergency" => Urgency::Emergency,
            _ => Urgency::Unknown,
        }
    }
}

impl From<String> for Urgency {
    fn from(s: String) -> Self {
        Urgency::from(s.as_str())
    }
}
