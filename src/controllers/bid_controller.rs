//! Controller de bids
//!
//! Colocación de pujas (con gating de verificación del transportista) y la
//! unidad atómica de aceptación: lock de fila sobre el ride, validación de
//! precondiciones, puja ganadora, rechazo de competidoras y asignación del
//! ride en una sola transacción. De dos accepts concurrentes gana exactamente
//! uno; el otro observa BidNotAcceptable.

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::bid_dto::{BidResponse, CreateBidRequest, UpdateBidStatusRequest};
use crate::dto::common::ApiResponse;
use crate::models::notification::notification_type;
use crate::repositories::bid_repository::BidRepository;
use crate::repositories::notification_repository::{NewNotification, NotificationRepository};
use crate::repositories::ride_repository::RideRepository;
use crate::repositories::transporter_repository::TransporterRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::bid_acceptance_service::{validate_acceptance, validate_rejection};
use crate::services::bid_ranking_service;
use crate::utils::errors::AppError;

pub struct BidController {
    pool: PgPool,
    bids: BidRepository,
    rides: RideRepository,
    transporters: TransporterRepository,
    vehicles: VehicleRepository,
    notifications: NotificationRepository,
}

impl BidController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bids: BidRepository::new(pool.clone()),
            rides: RideRepository::new(pool.clone()),
            transporters: TransporterRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            notifications: NotificationRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(
        &self,
        request: CreateBidRequest,
    ) -> Result<ApiResponse<BidResponse>, AppError> {
        if request.amount <= rust_decimal::Decimal::ZERO {
            return Err(AppError::BadRequest("Bid amount must be positive".to_string()));
        }

        let ride = self
            .rides
            .find_by_id(request.ride_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ride {} not found", request.ride_id)))?;

        if !ride.is_open_for_bidding() {
            return Err(AppError::Conflict(format!(
                "Bidding is {} for ride {}",
                ride.bidding_status, ride.id
            )));
        }
        if ride.status != "pending" && ride.status != "bid_placed" {
            return Err(AppError::Conflict(format!(
                "Ride is {} and no longer accepts bids",
                ride.status
            )));
        }

        // Gating de elegibilidad: solo transportistas activos, verificados y
        // con documentación completa pueden pujar
        let transporter = self
            .transporters
            .find_by_id(request.transporter_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Transporter {} not found", request.transporter_id))
            })?;

        if !transporter.can_bid() {
            return Err(AppError::Forbidden(
                "Transporter is not verified for marketplace bidding".to_string(),
            ));
        }

        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Vehicle {} not found", request.vehicle_id))
            })?;

        if vehicle.transporter_id != Some(request.transporter_id) {
            return Err(AppError::Forbidden(
                "Vehicle does not belong to this transporter".to_string(),
            ));
        }
        if !vehicle.is_active() {
            return Err(AppError::Conflict(format!(
                "Vehicle {} is {}",
                vehicle.id, vehicle.status
            )));
        }

        let bid = self
            .bids
            .create(
                request.ride_id,
                request.user_id,
                request.transporter_id,
                request.vehicle_id,
                request.amount,
            )
            .await?;

        // El primer bid mueve el ride pending -> bid_placed
        self.rides.mark_bid_placed(request.ride_id).await?;

        if let Err(e) = self
            .notifications
            .create(NewNotification {
                recipient_id: ride.customer_id,
                notification_type: notification_type::BID_PLACED.to_string(),
                title: "New bid on your ride".to_string(),
                message: format!("A transporter offered {} for your ride", bid.amount),
                ride_id: Some(ride.id),
                match_score: None,
                match_reason: None,
            })
            .await
        {
            warn!("Failed to create bid-placed notification for ride {}: {}", ride.id, e);
        }

        info!("Bid {} placed on ride {} for {}", bid.id, ride.id, bid.amount);

        Ok(ApiResponse::success_with_message(
            BidResponse::from(bid),
            "Bid placed".to_string(),
        ))
    }

    pub async fn list_by_ride(&self, ride_id: Uuid) -> Result<Vec<BidResponse>, AppError> {
        self.rides
            .find_by_id(ride_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ride {} not found", ride_id)))?;

        let bids = self.bids.find_by_ride(ride_id).await?;
        let ranked = bid_ranking_service::rank_bids(bids);

        Ok(ranked.into_iter().map(BidResponse::from).collect())
    }

    /// PATCH /bid/:id/status con {status: accepted|rejected}
    pub async fn update_status(
        &self,
        bid_id: Uuid,
        request: UpdateBidStatusRequest,
    ) -> Result<BidResponse, AppError> {
        match request.status.as_str() {
            "accepted" => self.accept(bid_id).await,
            "rejected" => self.reject(bid_id).await,
            other => Err(AppError::BadRequest(format!(
                "Bid status can only be set to 'accepted' or 'rejected', got '{}'",
                other
            ))),
        }
    }

    /// Unidad atómica de aceptación. Todo-o-nada: cualquier violación de
    /// precondición sale con BidNotAcceptable antes de escribir.
    async fn accept(&self, bid_id: Uuid) -> Result<BidResponse, AppError> {
        // Lectura inicial solo para conocer el ride; el estado autoritativo
        // se relee bajo lock dentro de la transacción
        let bid = self
            .bids
            .find_by_id(bid_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bid {} not found", bid_id)))?;

        let mut tx = self.pool.begin().await?;

        // El lock del ride serializa los accepts concurrentes: el perdedor
        // espera acá y releee el ride ya cerrado
        let ride = self
            .rides
            .find_by_id_for_update(&mut tx, bid.ride_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ride {} not found", bid.ride_id)))?;

        let bid = self
            .bids
            .find_by_id_for_update(&mut tx, bid_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bid {} not found", bid_id)))?;

        validate_acceptance(&ride, &bid)?;

        let accepted = self.bids.mark_accepted(&mut tx, bid.id).await?;
        let losers = self
            .bids
            .reject_other_pending(&mut tx, ride.id, bid.id)
            .await?;
        let ride = self
            .rides
            .apply_bid_acceptance(
                &mut tx,
                ride.id,
                accepted.id,
                accepted.user_id,
                accepted.vehicle_id,
                accepted.transporter_id,
            )
            .await?;

        self.notifications
            .create_in_tx(
                &mut tx,
                NewNotification {
                    recipient_id: accepted.user_id,
                    notification_type: notification_type::BID_ACCEPTED.to_string(),
                    title: "Bid accepted".to_string(),
                    message: format!(
                        "Your bid of {} was accepted for {} -> {}",
                        accepted.amount, ride.pickup_location, ride.drop_location
                    ),
                    ride_id: Some(ride.id),
                    match_score: None,
                    match_reason: None,
                },
            )
            .await?;

        for loser in &losers {
            self.notifications
                .create_in_tx(
                    &mut tx,
                    NewNotification {
                        recipient_id: loser.user_id,
                        notification_type: notification_type::BID_REJECTED.to_string(),
                        title: "Bid not selected".to_string(),
                        message: "Another bid was accepted for this ride".to_string(),
                        ride_id: Some(ride.id),
                        match_score: None,
                        match_reason: None,
                    },
                )
                .await?;
        }

        tx.commit().await?;

        info!(
            "Bid {} accepted on ride {} ({} competing bids rejected)",
            accepted.id,
            ride.id,
            losers.len()
        );

        Ok(BidResponse::from(accepted))
    }

    async fn reject(&self, bid_id: Uuid) -> Result<BidResponse, AppError> {
        let bid = self
            .bids
            .find_by_id(bid_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bid {} not found", bid_id)))?;

        validate_rejection(&bid)?;

        let rejected = self.bids.mark_rejected(bid_id).await?;

        if let Err(e) = self
            .notifications
            .create(NewNotification {
                recipient_id: rejected.user_id,
                notification_type: notification_type::BID_REJECTED.to_string(),
                title: "Bid rejected".to_string(),
                message: "Your bid was rejected".to_string(),
                ride_id: Some(rejected.ride_id),
                match_score: None,
                match_reason: None,
            })
            .await
        {
            warn!("Failed to create bid-rejected notification for bid {}: {}", bid_id, e);
        }

        Ok(BidResponse::from(rejected))
    }

    pub async fn list_by_transporter(
        &self,
        transporter_id: Uuid,
    ) -> Result<Vec<BidResponse>, AppError> {
        let bids = self.bids.find_by_transporter(transporter_id).await?;
        Ok(bids.into_iter().map(BidResponse::from).collect())
    }
}
