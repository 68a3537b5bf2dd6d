//! Controller de vehículos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleStatusRequest, VehicleOwnerFilters, VehicleResponse,
};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        // Propiedad exclusiva: exactamente uno de user_id / transporter_id
        match (request.user_id, request.transporter_id) {
            (Some(_), Some(_)) => {
                return Err(AppError::BadRequest(
                    "Vehicle must belong to either a user or a transporter, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(AppError::BadRequest(
                    "Vehicle must belong to a user or a transporter".to_string(),
                ))
            }
            _ => {}
        }

        if self
            .repository
            .license_plate_exists(&request.license_plate)
            .await?
        {
            return Err(conflict_error("Vehicle", "license_plate", &request.license_plate));
        }

        let vehicle = self
            .repository
            .create(
                request.user_id,
                request.transporter_id,
                request.vehicle_type,
                request.license_plate,
                request.capacity_kg,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehicle registered".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self, filters: VehicleOwnerFilters) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self
            .repository
            .find_by_owner(filters.user_id, filters.transporter_id)
            .await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateVehicleStatusRequest,
    ) -> Result<VehicleResponse, AppError> {
        let status = VehicleStatus::parse(&request.status).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown vehicle status '{}'", request.status))
        })?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

        let vehicle = self.repository.update_status(id, status.as_str()).await?;
        Ok(VehicleResponse::from(vehicle))
    }
}
