//! DTOs de bids

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::bid::Bid;

/// Request para crear una puja sobre un ride abierto
#[derive(Debug, Deserialize)]
pub struct CreateBidRequest {
    pub ride_id: Uuid,
    pub user_id: Uuid,
    pub transporter_id: Uuid,
    pub vehicle_id: Uuid,
    pub amount: Decimal,
}

/// Request para resolver una puja (accepted | rejected)
#[derive(Debug, Deserialize)]
pub struct UpdateBidStatusRequest {
    pub status: String,
}

/// Response de puja para la API
#[derive(Debug, Serialize)]
pub struct BidResponse {
    pub id: Uuid,
    pub ride_id: Uuid,
    pub user_id: Uuid,
    pub transporter_id: Uuid,
    pub vehicle_id: Uuid,
    pub amount: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Bid> for BidResponse {
    fn from(bid: Bid) -> Self {
        Self {
            id: bid.id,
            ride_id: bid.ride_id,
            user_id: bid.user_id,
            transporter_id: bid.transporter_id,
            vehicle_id: bid.vehicle_id,
            amount: bid.amount.to_string(),
            status: bid.status,
            created_at: bid.created_at,
        }
    }
}
