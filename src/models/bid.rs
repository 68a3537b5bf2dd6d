//! Modelo de bids (pujas sobre rides)
//!
//! Mapea a la tabla `bids`. Una puja nace pending y termina accepted o
//! rejected; nunca se borra.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BidStatus::Pending),
            "accepted" => Some(BidStatus::Accepted),
            "rejected" => Some(BidStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bid {
    pub id: Uuid,
    pub ride_id: Uuid,
    pub user_id: Uuid,
    pub transporter_id: Uuid,
    pub vehicle_id: Uuid,
    pub amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bid {
    pub fn bid_status(&self) -> Option<BidStatus> {
        BidStatus::parse(&self.status)
    }

    /// Solo las pujas pending pueden aceptarse o rechazarse
    pub fn is_pending(&self) -> bool {
        self.bid_status() == Some(BidStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_status_roundtrip() {
        for status in [BidStatus::Pending, BidStatus::Accepted, BidStatus::Rejected] {
            assert_eq!(BidStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BidStatus::parse("withdrawn"), None);
    }

    #[test]
    fn test_is_pending() {
        let bid = Bid {
            id: Uuid::new_v4(),
            ride_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            transporter_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            amount: Decimal::from(12000),
            status: "pending".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(bid.is_pending());

        let accepted = Bid {
            status: "accepted".to_string(),
            ..bid
        };
        assert!(!accepted.is_pending());
    }
}
