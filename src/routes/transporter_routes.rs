use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::transporter_controller::TransporterController;
use crate::dto::common::ApiResponse;
use crate::dto::transporter_dto::{
    RegisterTransporterRequest, RejectTransporterRequest, TransporterResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_transporter_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_transporter))
        .route("/:id", get(get_transporter))
        .route("/:id/documents-complete", patch(mark_documents_complete))
        .route("/:id/approve", patch(approve_transporter))
        .route("/:id/reject", patch(reject_transporter))
}

async fn register_transporter(
    State(state): State<AppState>,
    Json(request): Json<RegisterTransporterRequest>,
) -> Result<Json<ApiResponse<TransporterResponse>>, AppError> {
    let controller = TransporterController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn get_transporter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransporterResponse>, AppError> {
    let controller = TransporterController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn mark_documents_complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransporterResponse>, AppError> {
    let controller = TransporterController::new(state.pool.clone());
    let response = controller.mark_documents_complete(id).await?;
    Ok(Json(response))
}

async fn approve_transporter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransporterResponse>, AppError> {
    let controller = TransporterController::new(state.pool.clone());
    let response = controller.approve(id).await?;
    Ok(Json(response))
}

async fn reject_transporter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RejectTransporterRequest>,
) -> Result<Json<TransporterResponse>, AppError> {
    let controller = TransporterController::new(state.pool.clone());
    let response = controller.reject(id, request).await?;
    Ok(Json(response))
}
