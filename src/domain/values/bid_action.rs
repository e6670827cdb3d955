use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recommended bidding stance for an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidAction {
    DoNotBid,
    BidCautiously,
    BidAggressively,
    PricePremium,
}

impl BidAction {
    pub fn is_bid(&self) -> bool {
        !matches!(self, BidAction::DoNotBid)
    }
}

impl fmt::Display for BidAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidAction::DoNotBid => write!(f, "DO_NOT_BID"),
            BidAction::BidCautiously => write!(f, "BID_CAUTIOUSLY"),
            BidAction::BidAggressively => write!(f, "BID_AGGRESSIVELY"),
            BidAction::PricePremium => write!(f, "PRICE_PREMIUM"),
        }
    }
}

impl FromStr for BidAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "do_not_bid" => Ok(BidAction::DoNotBid),
            "bid_cautiously" => Ok(BidAction::BidCautiously),
            "bid_aggressively" => Ok(BidAction::BidAggressively),
            "price_premium" => Ok(BidAction::PricePremium),
            _ => Err(format!("Unknown bid action: {s}")),
        }
    }
}
