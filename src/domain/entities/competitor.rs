use serde::Serialize;

/// Reference data about a known competitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorProfile {
    pub name: &'static str,
    /// 0.0–1.0.
    pub threat_level: f64,
    pub typical_discount: f64,
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub market_share: f64,
}
