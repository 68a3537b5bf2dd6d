use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::bid_controller::BidController;
use crate::dto::bid_dto::{BidResponse, CreateBidRequest, UpdateBidStatusRequest};
use crate::dto::common::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_bid_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_bid))
        .route("/:id/status", patch(update_bid_status))
        .route("/ride/:ride_id", get(list_bids_by_ride))
        .route("/transporter/:transporter_id", get(list_bids_by_transporter))
}

async fn create_bid(
    State(state): State<AppState>,
    Json(request): Json<CreateBidRequest>,
) -> Result<Json<ApiResponse<BidResponse>>, AppError> {
    let controller = BidController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_bid_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBidStatusRequest>,
) -> Result<Json<BidResponse>, AppError> {
    let controller = BidController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn list_bids_by_ride(
    State(state): State<AppState>,
    Path(ride_id): Path<Uuid>,
) -> Result<Json<Vec<BidResponse>>, AppError> {
    let controller = BidController::new(state.pool.clone());
    let response = controller.list_by_ride(ride_id).await?;
    Ok(Json(response))
}

async fn list_bids_by_transporter(
    State(state): State<AppState>,
    Path(transporter_id): Path<Uuid>,
) -> Result<Json<Vec<BidResponse>>, AppError> {
    let controller = BidController::new(state.pool.clone());
    let response = controller.list_by_transporter(transporter_id).await?;
    Ok(Json(response))
}
