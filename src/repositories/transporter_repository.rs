//! Repositorio de transportistas

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::transporter::Transporter;
use crate::utils::errors::AppError;

pub struct TransporterRepository {
    pool: PgPool,
}

impl TransporterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_name: String,
        contact_email: String,
        contact_phone: Option<String>,
        service_pincodes: Option<Vec<String>>,
        vehicle_types: Option<Vec<String>>,
    ) -> Result<Transporter, AppError> {
        let transporter = sqlx::query_as::<_, Transporter>(
            r#"
            INSERT INTO transporters (
                id, company_name, contact_email, contact_phone, service_pincodes, vehicle_types,
                status, rejection_reason, is_verified, documents_complete, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 'pending_verification', NULL, FALSE, FALSE, $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_name)
        .bind(contact_email)
        .bind(contact_phone)
        .bind(service_pincodes)
        .bind(vehicle_types)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(transporter)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Transporter>, AppError> {
        let transporter =
            sqlx::query_as::<_, Transporter>("SELECT * FROM transporters WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(transporter)
    }

    /// Transportistas activos y verificados, candidatos a notificación de
    /// matching al crear un ride.
    pub async fn find_bidding_eligible(&self) -> Result<Vec<Transporter>, AppError> {
        let transporters = sqlx::query_as::<_, Transporter>(
            r#"
            SELECT * FROM transporters
            WHERE status = 'active' AND is_verified = TRUE AND documents_complete = TRUE
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transporters)
    }

    pub async fn mark_documents_complete(&self, id: Uuid) -> Result<Transporter, AppError> {
        let transporter = sqlx::query_as::<_, Transporter>(
            r#"
            UPDATE transporters
            SET documents_complete = TRUE, status = 'pending_approval', updated_at = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(transporter)
    }

    pub async fn approve(&self, id: Uuid) -> Result<Transporter, AppError> {
        let transporter = sqlx::query_as::<_, Transporter>(
            r#"
            UPDATE transporters
            SET status = 'active', is_verified = TRUE, rejection_reason = NULL, updated_at = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(transporter)
    }

    pub async fn reject(&self, id: Uuid, reason: String) -> Result<Transporter, AppError> {
        let transporter = sqlx::query_as::<_, Transporter>(
            r#"
            UPDATE transporters
            SET status = 'rejected', rejection_reason = $2, updated_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(reason)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(transporter)
    }
}
