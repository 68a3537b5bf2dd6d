//! Repositorio de notificaciones
//!
//! Registros fire-and-forget leídos por polling. Los fallos al crear
//! notificaciones no deben abortar la operación que las dispara.

use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::notification::Notification;
use crate::utils::errors::AppError;

/// Campos para crear una notificación
pub struct NewNotification {
    pub recipient_id: Uuid,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub ride_id: Option<Uuid>,
    pub match_score: Option<i32>,
    pub match_reason: Option<String>,
}

pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewNotification) -> Result<Notification, AppError> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (id, recipient_id, notification_type, title, message,
                                       ride_id, match_score, match_reason, read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.recipient_id)
        .bind(new.notification_type)
        .bind(new.title)
        .bind(new.message)
        .bind(new.ride_id)
        .bind(new.match_score)
        .bind(new.match_reason)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    /// Variante transaccional para las notificaciones que forman parte de la
    /// unidad de aceptación de pujas.
    pub async fn create_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        new: NewNotification,
    ) -> Result<Notification, AppError> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (id, recipient_id, notification_type, title, message,
                                       ride_id, match_score, match_reason, read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.recipient_id)
        .bind(new.notification_type)
        .bind(new.title)
        .bind(new.message)
        .bind(new.ride_id)
        .bind(new.match_score)
        .bind(new.match_reason)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await?;

        Ok(notification)
    }

    pub async fn find_by_recipient(
        &self,
        recipient_id: Uuid,
        unread_only: bool,
    ) -> Result<Vec<Notification>, AppError> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE recipient_id = $1 AND ($2 = FALSE OR read = FALSE)
            ORDER BY created_at DESC
            LIMIT 100
            "#,
        )
        .bind(recipient_id)
        .bind(unread_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<Notification, AppError> {
        let notification = sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }
}
