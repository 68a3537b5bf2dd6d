//! DTOs de rides

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::ride::Ride;

/// Request para crear un ride. El path de self-assign requiere
/// transporter_id + driver_id + vehicle_id juntos.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRideRequest {
    pub customer_id: Uuid,

    #[validate(length(min = 2, max = 200))]
    pub pickup_location: String,

    #[validate(length(min = 2, max = 200))]
    pub drop_location: String,

    pub pickup_pincode: Option<String>,
    pub drop_pincode: Option<String>,

    pub ride_date: NaiveDate,
    pub pickup_time: Option<String>,
    pub drop_time: Option<String>,

    pub price: Decimal,

    #[validate(length(min = 2, max = 100))]
    pub cargo_type: Option<String>,

    pub weight_kg: Option<Decimal>,
    pub required_vehicle_type: Option<String>,

    // Self-assign: el transportista publica y asigna su propio driver/vehículo
    pub self_assign: Option<SelfAssignRequest>,
}

#[derive(Debug, Deserialize)]
pub struct SelfAssignRequest {
    pub transporter_id: Uuid,
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
}

/// Request para cambiar el estado del ride
#[derive(Debug, Deserialize)]
pub struct UpdateRideStatusRequest {
    pub status: String,
}

/// Request para asignar driver/vehículo
#[derive(Debug, Deserialize)]
pub struct AssignDriverVehicleRequest {
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
}

/// Request para completar el viaje
#[derive(Debug, Default, Deserialize)]
pub struct CompleteTripRequest {
    #[serde(default)]
    pub admin_override: bool,
}

/// Filtros de listado de rides
#[derive(Debug, Deserialize)]
pub struct RideListFilters {
    pub status: Option<String>,
    pub customer_id: Option<Uuid>,
    pub transporter_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query del endpoint cheapest
#[derive(Debug, Deserialize)]
pub struct CheapestBidsQuery {
    pub limit: Option<usize>,
}

/// Response de ride para la API
#[derive(Debug, Serialize)]
pub struct RideResponse {
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
    pub price: String,
    pub cargo_type: Option<String>,
    pub weight_kg: Option<String>,
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
}

impl From<Ride> for RideResponse {
    fn from(ride: Ride) -> Self {
        Self {
            id: ride.id,
            customer_id: ride.customer_id,
            pickup_location: ride.pickup_location,
            drop_location: ride.drop_location,
            pickup_pincode: ride.pickup_pincode,
            drop_pincode: ride.drop_pincode,
            ride_date: ride.ride_date,
            pickup_time: ride.pickup_time,
            drop_time: ride.drop_time,
            status: ride.status,
            price: ride.price.to_string(),
            cargo_type: ride.cargo_type,
            weight_kg: ride.weight_kg.map(|w| w.to_string()),
            required_vehicle_type: ride.required_vehicle_type,
            transporter_id: ride.transporter_id,
            assigned_driver_id: ride.assigned_driver_id,
            assigned_vehicle_id: ride.assigned_vehicle_id,
            bidding_status: ride.bidding_status,
            accepted_bid_id: ride.accepted_bid_id,
            pickup_completed: ride.pickup_completed,
            delivery_completed: ride.delivery_completed,
            pickup_completed_at: ride.pickup_completed_at,
            delivery_completed_at: ride.delivery_completed_at,
            created_at: ride.created_at,
        }
    }
}
