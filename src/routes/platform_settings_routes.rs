use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Json, Router,
};
use rust_decimal::Decimal;

use crate::controllers::platform_settings_controller::PlatformSettingsController;
use crate::dto::common::ApiResponse;
use crate::dto::platform_settings_dto::{
    FeePreviewResponse, SettingsResponse, UpdateSettingsRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_platform_settings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings))
        .route("/", patch(update_settings))
        .route("/preview/:amount", get(preview_fee))
}

async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, AppError> {
    let controller = PlatformSettingsController::new(state.pool.clone());
    let response = controller.get().await?;
    Ok(Json(response))
}

async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<ApiResponse<SettingsResponse>>, AppError> {
    let controller = PlatformSettingsController::new(state.pool.clone());
    let response = controller.update(request).await?;
    Ok(Json(response))
}

async fn preview_fee(
    State(state): State<AppState>,
    Path(amount): Path<Decimal>,
) -> Result<Json<FeePreviewResponse>, AppError> {
    let controller = PlatformSettingsController::new(state.pool.clone());
    let response = controller.preview(amount).await?;
    Ok(Json(response))
}
