use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::document_controller::DocumentController;
use crate::dto::common::ApiResponse;
use crate::dto::document_dto::{
    CreateDocumentRequest, DocumentResponse, ReplaceDocumentRequest, UpdateDocumentStatusRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_document_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_document))
        .route("/:id/status", patch(update_document_status))
        .route("/:id/replace", post(replace_document))
        .route("/owner/:owner_type/:owner_id", get(list_active_documents))
}

async fn create_document(
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_document_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDocumentStatusRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn replace_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReplaceDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.replace(id, request).await?;
    Ok(Json(response))
}

async fn list_active_documents(
    State(state): State<AppState>,
    Path((owner_type, owner_id)): Path<(String, Uuid)>,
) -> Result<Json<Vec<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.list_active_by_owner(owner_type, owner_id).await?;
    Ok(Json(response))
}
