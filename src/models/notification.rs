//! Modelo de Notification
//!
//! Registros fire-and-forget creados como efecto secundario de transiciones de
//! rides y pujas; los clientes los leen por polling. Las notificaciones de
//! matching llevan score y razón best-effort (hint de UI, no ranking
//! autoritativo).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipos de notificación - columna string `notification_type`
pub mod notification_type {
    pub const RIDE_MATCH: &str = "ride_match";
    pub const BID_PLACED: &str = "bid_placed";
    pub const BID_ACCEPTED: &str = "bid_accepted";
    pub const BID_REJECTED: &str = "bid_rejected";
    pub const TRIP_COMPLETED: &str = "trip_completed";
}

/// Notification principal - mapea exactamente a la tabla `notifications`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
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
