use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::notification_controller::NotificationController;
use crate::dto::notification_dto::{NotificationListQuery, NotificationResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_notification_router() -> Router<AppState> {
    Router::new()
        .route("/:id", get(list_notifications))
        .route("/:id/read", patch(mark_notification_read))
}

async fn list_notifications(
    State(state): State<AppState>,
    Path(recipient_id): Path<Uuid>,
    Query(query): Query<NotificationListQuery>,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller
        .list_by_recipient(recipient_id, query.unread.unwrap_or(false))
        .await?;
    Ok(Json(response))
}

async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NotificationResponse>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.mark_read(id).await?;
    Ok(Json(response))
}
