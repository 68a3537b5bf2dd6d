//! Modelo de rides (viajes de carga)
//!
//! Mapea a la tabla `rides`. El estado del viaje y el estado de las pujas
//! se guardan como string; los enums tipados viven acá con sus conversores.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estados del ciclo de vida de un ride
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideStatus {
    Pending,
    BidPlaced,
    Scheduled,
    Assigned,
    Active,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Pending => "pending",
            RideStatus::BidPlaced => "bid_placed",
            RideStatus::Scheduled => "scheduled",
            RideStatus::Assigned => "assigned",
            RideStatus::Active => "active",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(RideStatus::Pending),
            "bid_placed" => Some(RideStatus::BidPlaced),
            "scheduled" => Some(RideStatus::Scheduled),
            "assigned" => Some(RideStatus::Assigned),
            "active" => Some(RideStatus::Active),
            "completed" => Some(RideStatus::Completed),
            "cancelled" => Some(RideStatus::Cancelled),
            _ => None,
        }
    }

    /// Estados desde los que no hay salida
    pub fn is_terminal(&self) -> bool {
        matches!(self, RideStatus::Completed | RideStatus::Cancelled)
    }
}

/// Estado de la ronda de pujas de un ride
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiddingStatus {
    Open,
    Closed,
    SelfAssigned,
}

impl BiddingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiddingStatus::Open => "open",
            BiddingStatus::Closed => "closed",
            BiddingStatus::SelfAssigned => "self_assigned",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(BiddingStatus::Open),
            "closed" => Some(BiddingStatus::Closed),
            "self_assigned" => Some(BiddingStatus::SelfAssigned),
            _ => None,
        }
    }
}

/// Ride tal como vive en la base
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ride {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub pickup_location: String,
    pub drop_location: String,
    pub pickup_pincode: Option<String>,
    pub drop_pincode: Option<String>,
    pub ride_date: NaiveDate,
    pub pickup_time: Option<String>,
    pub drop_time: Option<String>,
    pub status: String,
    pub price: Decimal,
    pub cargo_type: Option<String>,
    pub weight_kg: Option<Decimal>,
    pub required_vehicle_type: Option<String>,
    pub transporter_id: Option<Uuid>,
    pub assigned_driver_id: Option<Uuid>,
    pub assigned_vehicle_id: Option<Uuid>,
    pub bidding_status: String,
    pub accepted_bid_id: Option<Uuid>,
    pub pickup_completed: bool,
    pub delivery_completed: bool,
    pub pickup_completed_at: Option<DateTime<Utc>>,
    pub delivery_completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ride {
    pub fn ride_status(&self) -> Option<RideStatus> {
        RideStatus::parse(&self.status)
    }

    pub fn bidding(&self) -> Option<BiddingStatus> {
        BiddingStatus::parse(&self.bidding_status)
    }

    /// Un ride recibe pujas solo con la ronda abierta
    pub fn is_open_for_bidding(&self) -> bool {
        self.bidding() == Some(BiddingStatus::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ride_status_roundtrip() {
        for status in [
            RideStatus::Pending,
            RideStatus::BidPlaced,
            RideStatus::Scheduled,
            RideStatus::Assigned,
            RideStatus::Active,
            RideStatus::Completed,
            RideStatus::Cancelled,
        ] {
            assert_eq!(RideStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(RideStatus::parse("en_route"), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(RideStatus::Completed.is_terminal());
        assert!(RideStatus::Cancelled.is_terminal());
        assert!(!RideStatus::Active.is_terminal());
    }

    #[test]
    fn test_bidding_status_parse() {
        assert_eq!(BiddingStatus::parse("open"), Some(BiddingStatus::Open));
        assert_eq!(BiddingStatus::parse("closed"), Some(BiddingStatus::Closed));
        assert_eq!(
            BiddingStatus::parse("self_assigned"),
            Some(BiddingStatus::SelfAssigned)
        );
        assert_eq!(BiddingStatus::parse("paused"), None);
    }
}
