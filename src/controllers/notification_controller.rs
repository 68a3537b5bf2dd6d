//! Controller de notificaciones

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::notification_dto::NotificationResponse;
use crate::repositories::notification_repository::NotificationRepository;
use crate::utils::errors::AppError;

pub struct NotificationController {
    repository: NotificationRepository,
}

impl NotificationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: NotificationRepository::new(pool),
        }
    }

    pub async fn list_by_recipient(
        &self,
        recipient_id: Uuid,
        unread_only: bool,
    ) -> Result<Vec<NotificationResponse>, AppError> {
        let notifications = self
            .repository
            .find_by_recipient(recipient_id, unread_only)
            .await?;

        Ok(notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect())
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<NotificationResponse, AppError> {
        let notification = self.repository.mark_read(id).await.map_err(|e| match e {
            AppError::Database(sqlx::Error::RowNotFound) => {
                AppError::NotFound(format!("Notification {} not found", id))
            }
            other => other,
        })?;

        Ok(NotificationResponse::from(notification))
    }
}
