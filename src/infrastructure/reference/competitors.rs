//! Static competitor reference table.

use crate::domain::entities::competitor::CompetitorProfile;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Registry key of the dominant competitor.
pub const DOMINANT_COMPETITOR: &str = "ABB";

static COMPETITOR_PROFILES: Lazy<BTreeMap<String, CompetitorProfile>> = Lazy::new(|| {
    let profiles = [
        (
            DOMINANT_COMPETITOR,
            CompetitorProfile {
                name: "ABB Ltd",
                threat_level: 0.9,
                // Can go all the way to zero margin in a price war.
                typical_discount: 0.20,
                strengths: vec![
                    "Deep pockets for price wars",
                    "Global brand recognition",
                    "Extensive product range",
                    "Corporate backing",
                ],
                weaknesses: vec![
                    "Slow response time (8+ weeks)",
                    "Minimum order quantities",
                    "Corporate bureaucracy",
                    "No local technical support",
                ],
                market_share: 0.35,
            },
        ),
        (
            "Schneider Electric",
            CompetitorProfile {
                name: "Schneider Electric",
                threat_level: 0.6,
                typical_discount: 0.12,
                strengths: vec!["Strong automation portfolio", "Good technical support"],
                weaknesses: vec!["Higher pricing", "Limited local presence"],
                market_share: 0.15,
            },
        ),
        (
            "Siemens",
            CompetitorProfile {
                name: "Siemens AG",
                threat_level: 0.5,
                typical_discount: 0.10,
                strengths: vec!["Quality products", "Strong engineering"],
                weaknesses: vec!["Premium pricing", "Slow delivery"],
                market_share: 0.12,
            },
        ),
    ];

    profiles
        .into_iter()
        .map(|(key, profile)| (key.to_string(), profile))
        .collect()
});

/// The shared, immutable competitor registry. Built on first access.
pub fn competitor_profiles() -> &'static BTreeMap<String, CompetitorProfile> {
    &COMPETITOR_PROFILES
}
