//! Repositorio de documentos
//!
//! Los documentos reemplazados conservan la fila con status `replaced` y
//! back-reference `replaced_by_id`; el listado activo los excluye.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::document::Document;
use crate::utils::errors::AppError;

pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        owner_type: String,
        owner_id: Uuid,
        document_type: String,
        file_url: String,
    ) -> Result<Document, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (id, owner_type, owner_id, document_type, file_url, status,
                                   rejection_reason, replaced_by_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 'pending', NULL, NULL, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_type)
        .bind(owner_id)
        .bind(document_type)
        .bind(file_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(document)
    }

    /// Listado activo por dueño: excluye replaced y deleted
    pub async fn find_active_by_owner(
        &self,
        owner_type: &str,
        owner_id: Uuid,
    ) -> Result<Vec<Document>, AppError> {
        let documents = sqlx::query_as::<_, Document>(
            r#"
            SELECT * FROM documents
            WHERE owner_type = $1 AND owner_id = $2
              AND status NOT IN ('replaced', 'deleted')
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_type)
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
        rejection_reason: Option<String>,
    ) -> Result<Document, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            UPDATE documents
            SET status = $2, rejection_reason = $3, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(rejection_reason)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    /// Reemplazo: crea el documento nuevo y marca el viejo como `replaced`
    /// con el back-reference, en una transacción.
    pub async fn replace(&self, old_id: Uuid, file_url: String) -> Result<Document, AppError> {
        let mut tx = self.pool.begin().await?;

        let old = sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1 FOR UPDATE")
            .bind(old_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Document {} not found", old_id)))?;

        if old.status == "replaced" || old.status == "deleted" {
            return Err(AppError::Conflict(format!(
                "Document {} is already {}",
                old_id, old.status
            )));
        }

        let now = Utc::now();
        let replacement = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (id, owner_type, owner_id, document_type, file_url, status,
                                   rejection_reason, replaced_by_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 'pending', NULL, NULL, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&old.owner_type)
        .bind(old.owner_id)
        .bind(&old.document_type)
        .bind(file_url)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE documents SET status = 'replaced', replaced_by_id = $2, updated_at = $3 WHERE id = $1",
        )
        .bind(old_id)
        .bind(replacement.id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(replacement)
    }
}
