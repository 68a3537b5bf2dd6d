//! DTOs de notificaciones

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::notification::Notification;

/// Query de listado: ?unread=true filtra las no leídas
#[derive(Debug, Deserialize)]
pub struct NotificationListQuery {
    pub unread: Option<bool>,
}

/// Response de notificación para la API (polling de la campanita)
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub ride_id: Option<Uuid>,
    pub match_score: Option<i32>,
    pub match_reason: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            recipient_id: n.recipient_id,
            notification_type: n.notification_type,
            title: n.title,
            message: n.message,
            ride_id: n.ride_id,
            match_score: n.match_score,
            match_reason: n.match_reason,
            read: n.read,
            created_at: n.created_at,
        }
    }
}
