//! Modelo de Vehicle
//!
//! Vehículos registrados por un usuario independiente o por un transportista.
//! Mapea exactamente a la tabla `vehicles` del schema PostgreSQL.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del vehículo - columna string `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Active,
    Inactive,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Inactive => "inactive",
            VehicleStatus::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(VehicleStatus::Active),
            "inactive" => Some(VehicleStatus::Inactive),
            "maintenance" => Some(VehicleStatus::Maintenance),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla `vehicles`
///
/// Invariante: exactamente uno de `user_id` / `transporter_id` está presente
/// (propiedad exclusiva, validada en la creación).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub transporter_id: Option<Uuid>,
    pub vehicle_type: String,
    pub license_plate: String,
    pub capacity_kg: Option<Decimal>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn vehicle_status(&self) -> Option<VehicleStatus> {
        VehicleStatus::parse(&self.status)
    }

    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
