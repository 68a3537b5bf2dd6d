//! DTOs de vehículos

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para crear un vehículo. Exactamente uno de user_id /
/// transporter_id debe venir (propiedad exclusiva).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub user_id: Option<Uuid>,
    pub transporter_id: Option<Uuid>,

    #[validate(length(min = 2, max = 50))]
    pub vehicle_type: String,

    #[validate(length(min = 5, max = 20))]
    pub license_plate: String,

    pub capacity_kg: Option<Decimal>,
}

/// Request para actualizar el estado del vehículo
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub status: String,
}

/// Filtros de listado por dueño
#[derive(Debug, Deserialize)]
pub struct VehicleOwnerFilters {
    pub user_id: Option<Uuid>,
    pub transporter_id: Option<Uuid>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub transporter_id: Option<Uuid>,
    pub vehicle_type: String,
    pub license_plate: String,
    pub capacity_kg: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            user_id: vehicle.user_id,
            transporter_id: vehicle.transporter_id,
            vehicle_type: vehicle.vehicle_type,
            license_plate: vehicle.license_plate,
            capacity_kg: vehicle.capacity_kg.map(|c| c.to_string()),
            status: vehicle.status,
            created_at: vehicle.created_at,
        }
    }
}
