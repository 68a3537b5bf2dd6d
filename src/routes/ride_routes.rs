use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::ride_controller::RideController;
use crate::dto::bid_dto::BidResponse;
use crate::dto::common::ApiResponse;
use crate::dto::ride_dto::{
    AssignDriverVehicleRequest, CheapestBidsQuery, CompleteTripRequest, CreateRideRequest,
    RideListFilters, RideResponse, UpdateRideStatusRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ride_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_ride))
        .route("/", get(list_rides))
        .route("/:id", get(get_ride))
        .route("/:id/status", patch(update_ride_status))
        .route("/:id/assign", patch(assign_driver_vehicle))
        .route("/:id/pickup-complete", post(mark_pickup_complete))
        .route("/:id/delivery-complete", post(mark_delivery_complete))
        .route("/:id/complete", post(complete_trip))
        .route("/:id/bids/cheapest", get(cheapest_bids))
}

async fn create_ride(
    State(state): State<AppState>,
    Json(request): Json<CreateRideRequest>,
) -> Result<Json<ApiResponse<RideResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_rides(
    State(state): State<AppState>,
    Query(filters): Query<RideListFilters>,
) -> Result<Json<Vec<RideResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_ride(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RideResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_ride_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRideStatusRequest>,
) -> Result<Json<RideResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn assign_driver_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignDriverVehicleRequest>,
) -> Result<Json<RideResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.assign_driver_vehicle(id, request).await?;
    Ok(Json(response))
}

async fn mark_pickup_complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RideResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.mark_pickup_complete(id).await?;
    Ok(Json(response))
}

async fn mark_delivery_complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RideResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.mark_delivery_complete(id).await?;
    Ok(Json(response))
}

async fn complete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    request: Option<Json<CompleteTripRequest>>,
) -> Result<Json<RideResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let response = controller.complete_trip(id, request).await?;
    Ok(Json(response))
}

async fn cheapest_bids(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<CheapestBidsQuery>,
) -> Result<Json<Vec<BidResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.cheapest_bids(id, query.limit).await?;
    Ok(Json(response))
}
