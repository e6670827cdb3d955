use serde::{Deserialize, Serialize};
use std::fmt;

/// Engineering effort behind the quoted solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Complexity {
    Simple,
    Standard,
    Complex,
    Custom,
    Unknown,
}

impl Complexity {
    /// Off-the-shelf products that every competitor can quote.
    pub fn is_commodity(&self) -> bool {
        matches!(self, Complexity::Simple | Complexity::Standard)
    }

    /// Solutions that need engineering and local support.
    pub fn is_engineered(&self) -> bool {
        matches!(self, Complexity::Complex | Complexity::Custom)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Simple => write!(f, "simple"),
            Complexity::Standard => write!(f, "standard"),
            Complexity::Complex => write!(f, "complex"),
            Complexity::Custom => write!(f, "custom"),
            Complexity::Unknown => write!(f, "unknown"),
        }
    }
}

impl From<&str> for Complexity {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "simple" => Complexity::Simple,
            "standard" => Complexity::Standard,
            "complex" => Complexity::Complex,
            "custom" => Complexity::Custom,
            _ => Complexity::Unknown,
        }
    }
}

impl From<String> for Complexity {
    fn from(s: String) -> Self {
        Complexity::from(s.as_str())
    }
}
