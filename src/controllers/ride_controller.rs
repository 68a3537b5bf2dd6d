//! Controller de rides
//!
//! Orquesta la máquina de estados del ride: creación (incluido self-assign),
//! cambios de estado vía la tabla de transiciones, asignación de
//! driver/vehículo, progreso del viaje y completado.

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::bid_dto::BidResponse;
use crate::dto::common::ApiResponse;
use crate::dto::ride_dto::{
    AssignDriverVehicleRequest, CompleteTripRequest, CreateRideRequest, RideListFilters,
    RideResponse, UpdateRideStatusRequest,
};
use crate::models::notification::notification_type;
use crate::models::ride::{Ride, RideStatus};
use crate::repositories::bid_repository::BidRepository;
use crate::repositories::notification_repository::{NewNotification, NotificationRepository};
use crate::repositories::ride_repository::{NewRide, RideFilters, RideRepository};
use crate::repositories::transporter_repository::TransporterRepository;
use crate::services::bid_ranking_service;
use crate::services::matching_service;
use crate::services::ride_transition_service::{
    check_assignment, check_completion, check_transition, check_trip_progress, TransitionCheck,
};
use crate::utils::errors::AppError;
use crate::utils::validation::is_valid_pincode;

pub struct RideController {
    rides: RideRepository,
    bids: BidRepository,
    transporters: TransporterRepository,
    notifications: NotificationRepository,
}

impl RideController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            rides: RideRepository::new(pool.clone()),
            bids: BidRepository::new(pool.clone()),
            transporters: TransporterRepository::new(pool.clone()),
            notifications: NotificationRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRideRequest,
    ) -> Result<ApiResponse<RideResponse>, AppError> {
        request.validate()?;

        if request.price <= rust_decimal::Decimal::ZERO {
            return Err(AppError::BadRequest("Price must be positive".to_string()));
        }

        for pincode in [&request.pickup_pincode, &request.drop_pincode]
            .into_iter()
            .flatten()
        {
            if !is_valid_pincode(pincode) {
                return Err(AppError::BadRequest(format!(
                    "Invalid pincode '{}': expected 6 digits",
                    pincode
                )));
            }
        }

        // Self-assign: el transportista publica y asigna flota propia,
        // sin pasar por el marketplace
        let (status, bidding_status, transporter_id, driver_id, vehicle_id) =
            match &request.self_assign {
                Some(sa) => (
                    RideStatus::Assigned.as_str().to_string(),
                    "self_assigned".to_string(),
                    Some(sa.transporter_id),
                    Some(sa.driver_id),
                    Some(sa.vehicle_id),
                ),
                None => (
                    RideStatus::Pending.as_str().to_string(),
                    "open".to_string(),
                    None,
                    None,
                    None,
                ),
            };

        let open_for_bidding = request.self_assign.is_none();

        let ride = self
            .rides
            .create(NewRide {
                customer_id: request.customer_id,
                pickup_location: request.pickup_location,
                drop_location: request.drop_location,
                pickup_pincode: request.pickup_pincode,
                drop_pincode: request.drop_pincode,
                ride_date: request.ride_date,
                pickup_time: request.pickup_time,
                drop_time: request.drop_time,
                price: request.price,
                cargo_type: request.cargo_type,
                weight_kg: request.weight_kg,
                required_vehicle_type: request.required_vehicle_type,
                status,
                bidding_status,
                transporter_id,
                assigned_driver_id: driver_id,
                assigned_vehicle_id: vehicle_id,
            })
            .await?;

        info!("Ride {} created ({})", ride.id, ride.bidding_status);

        if open_for_bidding {
            // Best-effort: un fallo notificando no debe abortar la creación
            if let Err(e) = self.notify_matching_transporters(&ride).await {
                warn!("Failed to notify matching transporters for ride {}: {}", ride.id, e);
            }
        }

        Ok(ApiResponse::success_with_message(
            RideResponse::from(ride),
            "Ride created".to_string(),
        ))
    }

    /// Notificaciones de matching con score+razón best-effort
    async fn notify_matching_transporters(&self, ride: &Ride) -> Result<(), AppError> {
        let candidates = self.transporters.find_bidding_eligible().await?;
        let mut notified = 0;

        for transporter in &candidates {
            if let Some(result) = matching_service::score_transporter(ride, transporter) {
                self.notifications
                    .create(NewNotification {
                        recipient_id: transporter.id,
                        notification_type: notification_type::RIDE_MATCH.to_string(),
                        title: "New ride matches your fleet".to_string(),
                        message: format!(
                            "{} -> {} on {}",
                            ride.pickup_location, ride.drop_location, ride.ride_date
                        ),
                        ride_id: Some(ride.id),
                        match_score: Some(result.score),
                        match_reason: Some(result.reason),
                    })
                    .await?;
                notified += 1;
            }
        }

        info!(
            "Ride {}: notified {}/{} eligible transporters",
            ride.id,
            notified,
            candidates.len()
        );
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RideResponse, AppError> {
        let ride = self
            .rides
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ride {} not found", id)))?;

        Ok(RideResponse::from(ride))
    }

    pub async fn list(&self, filters: RideListFilters) -> Result<Vec<RideResponse>, AppError> {
        if let Some(status) = &filters.status {
            if RideStatus::parse(status).is_none() {
                return Err(AppError::BadRequest(format!("Unknown ride status '{}'", status)));
            }
        }

        let rides = self
            .rides
            .list(RideFilters {
                status: filters.status,
                customer_id: filters.customer_id,
                transporter_id: filters.transporter_id,
                limit: filters.limit.unwrap_or(50),
                offset: filters.offset.unwrap_or(0),
            })
            .await?;

        Ok(rides.into_iter().map(RideResponse::from).collect())
    }

    /// Punto de entrada único para cambios de estado. Mismo estado es no-op
    /// exitoso (retries de clientes); transición ilegal es InvalidTransition
    /// sin escritura parcial.
    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateRideStatusRequest,
    ) -> Result<RideResponse, AppError> {
        let target = RideStatus::parse(&request.status)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown ride status '{}'", request.status)))?;

        let ride = self
            .rides
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ride {} not found", id)))?;

        let current = ride.ride_status().ok_or_else(|| {
            AppError::Internal(format!("Ride {} has unknown status '{}'", id, ride.status))
        })?;

        match check_transition(current, target)? {
            TransitionCheck::NoOp => Ok(RideResponse::from(ride)),
            TransitionCheck::Apply => {
                let updated = self.rides.update_status(id, target.as_str()).await?;
                info!("Ride {} transitioned {} -> {}", id, current.as_str(), target.as_str());
                Ok(RideResponse::from(updated))
            }
        }
    }

    pub async fn assign_driver_vehicle(
        &self,
        id: Uuid,
        request: AssignDriverVehicleRequest,
    ) -> Result<RideResponse, AppError> {
        let ride = self
            .rides
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ride {} not found", id)))?;

        match check_assignment(&ride, request.driver_id, request.vehicle_id)? {
            TransitionCheck::NoOp => Ok(RideResponse::from(ride)),
            TransitionCheck::Apply => {
                let updated = self
                    .rides
                    .assign_driver_vehicle(id, request.driver_id, request.vehicle_id)
                    .await?;
                info!("Ride {} assigned driver {} / vehicle {}", id, request.driver_id, request.vehicle_id);
                Ok(RideResponse::from(updated))
            }
        }
    }

    pub async fn mark_pickup_complete(&self, id: Uuid) -> Result<RideResponse, AppError> {
        let ride = self
            .rides
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ride {} not found", id)))?;

        check_trip_progress(&ride)?;

        if ride.pickup_completed {
            return Ok(RideResponse::from(ride));
        }

        let updated = self.rides.mark_pickup_complete(id).await?;
        Ok(RideResponse::from(updated))
    }

    /// Confirmar la entrega NO completa el viaje: el proof-of-delivery se
    /// sube entre la confirmación y el CompleteTrip explícito.
    pub async fn mark_delivery_complete(&self, id: Uuid) -> Result<RideResponse, AppError> {
        let ride = self
            .rides
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ride {} not found", id)))?;

        check_trip_progress(&ride)?;

        if ride.delivery_completed {
            return Ok(RideResponse::from(ride));
        }

        let updated = self.rides.mark_delivery_complete(id).await?;
        Ok(RideResponse::from(updated))
    }

    pub async fn complete_trip(
        &self,
        id: Uuid,
        request: CompleteTripRequest,
    ) -> Result<RideResponse, AppError> {
        let ride = self
            .rides
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ride {} not found", id)))?;

        match check_completion(&ride, request.admin_override)? {
            TransitionCheck::NoOp => Ok(RideResponse::from(ride)),
            TransitionCheck::Apply => {
                let updated = self
                    .rides
                    .update_status(id, RideStatus::Completed.as_str())
                    .await?;

                if let Err(e) = self
                    .notifications
                    .create(NewNotification {
                        recipient_id: updated.customer_id,
                        notification_type: notification_type::TRIP_COMPLETED.to_string(),
                        title: "Trip completed".to_string(),
                        message: format!(
                            "Your cargo from {} to {} was delivered",
                            updated.pickup_location, updated.drop_location
                        ),
                        ride_id: Some(updated.id),
                        match_score: None,
                        match_reason: None,
                    })
                    .await
                {
                    warn!("Failed to create completion notification for ride {}: {}", id, e);
                }

                info!("Ride {} completed", id);
                Ok(RideResponse::from(updated))
            }
        }
    }

    /// Ranking advisorio "más barata primero", truncado a limit
    pub async fn cheapest_bids(
        &self,
        ride_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<BidResponse>, AppError> {
        self.rides
            .find_by_id(ride_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ride {} not found", ride_id)))?;

        let bids = self.bids.find_by_ride(ride_id).await?;
        let ranked = bid_ranking_service::cheapest_bids(bids, limit.unwrap_or(10).min(50));

        Ok(ranked.into_iter().map(BidResponse::from).collect())
    }
}
