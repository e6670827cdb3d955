use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer tier, best (`A`) to worst (`D`).
///
/// Unrecognized grades deserialize to [`CustomerGrade::Unknown`] and score
/// neutrally everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum CustomerGrade {
    A,
    B,
    C,
    D,
    #[serde(rename = "unknown")]
    Unknown,
}

impl CustomerGrade {
    pub fn is_best(&self) -> bool {
        matches!(self, CustomerGrade::A)
    }

    pub fn is_worst(&self) -> bool {
        matches!(self, CustomerGrade::D)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CustomerGrade::Unknown)
    }
}

impl fmt::Display for CustomerGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerGrade::A => write!(f, "A"),
            CustomerGrade::B => write!(f, "B"),
            CustomerGrade::C => write!(f, "C"),
            CustomerGrade::D => write!(f, "D"),
            CustomerGrade::Unknown => write!(f, "unknown"),
        }
    }
}

impl From<&str> for CustomerGrade {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "A" => CustomerGrade::A,
            "B" => CustomerGrade::B,
            "C" => CustomerGrade::C,
            "D" => CustomerGrade::D,
            _ => CustomerGrade::Unknown,
        }
    }
}

impl From<String> for CustomerGrade {
    fn from(s: String) -> Self {
        CustomerGrade::from(s.as_str())
    }
}
