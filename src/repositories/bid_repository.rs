//! Repositorio de bids
//!
//! Acceso a la tabla `bids`. Las pujas nunca se borran; solo transicionan
//! de estado. Los métodos de la unidad de aceptación operan sobre la
//! transacción del caller.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::bid::Bid;
use crate::utils::errors::AppError;

pub struct BidRepository {
    pool: PgPool,
}

impl BidRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        ride_id: Uuid,
        user_id: Uuid,
        transporter_id: Uuid,
        vehicle_id: Uuid,
        amount: Decimal,
    ) -> Result<Bid, AppError> {
        let bid = sqlx::query_as::<_, Bid>(
            r#"
            INSERT INTO bids (id, ride_id, user_id, transporter_id, vehicle_id, amount, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(ride_id)
        .bind(user_id)
        .bind(transporter_id)
        .bind(vehicle_id)
        .bind(amount)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(bid)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Bid>, AppError> {
        let bid = sqlx::query_as::<_, Bid>("SELECT * FROM bids WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(bid)
    }

    pub async fn find_by_id_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Option<Bid>, AppError> {
        let bid = sqlx::query_as::<_, Bid>("SELECT * FROM bids WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(bid)
    }

    pub async fn find_by_ride(&self, ride_id: Uuid) -> Result<Vec<Bid>, AppError> {
        let bids = sqlx::query_as::<_, Bid>(
            "SELECT * FROM bids WHERE ride_id = $1 ORDER BY created_at ASC",
        )
        .bind(ride_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bids)
    }

    pub async fn find_by_transporter(&self, transporter_id: Uuid) -> Result<Vec<Bid>, AppError> {
        let bids = sqlx::query_as::<_, Bid>(
            "SELECT * FROM bids WHERE transporter_id = $1 ORDER BY created_at DESC",
        )
        .bind(transporter_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bids)
    }

    /// Marca el bid ganador dentro de la unidad de aceptación
    pub async fn mark_accepted(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Bid, AppError> {
        let bid = sqlx::query_as::<_, Bid>(
            "UPDATE bids SET status = 'accepted', updated_at = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await?;

        Ok(bid)
    }

    /// Rechaza todas las pujas pendientes restantes del ride y devuelve los
    /// perdedores (para notificarlos).
    pub async fn reject_other_pending(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ride_id: Uuid,
        accepted_bid_id: Uuid,
    ) -> Result<Vec<Bid>, AppError> {
        let losers = sqlx::query_as::<_, Bid>(
            r#"
            UPDATE bids
            SET status = 'rejected', updated_at = $3
            WHERE ride_id = $1 AND id != $2 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(ride_id)
        .bind(accepted_bid_id)
        .bind(Utc::now())
        .fetch_all(&mut **tx)
        .await?;

        Ok(losers)
    }

    /// Rechazo manual individual (fuera de la aceptación)
    pub async fn mark_rejected(&self, id: Uuid) -> Result<Bid, AppError> {
        let bid = sqlx::query_as::<_, Bid>(
            "UPDATE bids SET status = 'rejected', updated_at = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(bid)
    }
}
