use serde::{Deserialize, Serialize};
use std::fmt;

/// Product line an opportunity is quoted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ProductCategory {
    GasAnalyzers,
    FlowMeters,
    LevelMeters,
    ElectricityMeters,
    /// General-purpose instrumentation.
    Instruments,
    Unknown,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCategory::GasAnalyzers => write!(f, "gas_analyzers"),
            ProductCategory::FlowMeters => write!(f, "flow_meters"),
            ProductCategory::LevelMeters => write!(f, "level_meters"),
            ProductCategory::ElectricityMeters => write!(f, "electricity_meters"),
            ProductCategory::Instruments => write!(f, "instruments"),
            ProductCategory::Unknown => write!(f, "unknown"),
        }
    }
}

impl From<&str> for ProductCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "gas_analyzers" | "gas_analyzer" => ProductCategory::GasAnalyzers,
            "flow_meters" | "flow_meter" => ProductCategory::FlowMeters,
            "level_meters" | "level_meter" => ProductCategory::LevelMeters,
            "electricity_meters" | "electricity_meter" => ProductCategory::ElectricityMeters,
            "instruments" | "instrument" => ProductCategory::Instruments,
            _ => ProductCategory::Unknown,
        }
    }
}

impl From<String> for ProductCategory {
    fn from(s: String) -> Self {
        ProductCategory::from(s.as_str())
    }
}
