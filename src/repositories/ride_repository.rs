//! Repositorio de rides
//!
//! Acceso a la tabla `rides`. Las operaciones que participan de la aceptación
//! de pujas reciben la transacción del caller; el resto opera sobre el pool.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::ride::Ride;
use crate::utils::errors::AppError;

/// Campos para crear un ride nuevo
pub struct NewRide {
    pub customer_id: Uuid,
    pub pickup_location: String,
    pub drop_location: String,
    pub pickup_pincode: Option<String>,
    pub drop_pincode: Option<String>,
    pub ride_date: NaiveDate,
    pub pickup_time: Option<String>,
    pub drop_time: Option<String>,
    pub price: Decimal,
    pub cargo_type: Option<String>,
    pub weight_kg: Option<Decimal>,
    pub required_vehicle_type: Option<String>,
    pub status: String,
    pub bidding_status: String,
    pub transporter_id: Option<Uuid>,
    pub assigned_driver_id: Option<Uuid>,
    pub assigned_vehicle_id: Option<Uuid>,
}

/// Filtros de listado
#[derive(Debug, Default)]
pub struct RideFilters {
    pub status: Option<String>,
    pub customer_id: Option<Uuid>,
    pub transporter_id: Option<Uuid>,
    pub limit: i64,
    pub offset: i64,
}

pub struct RideRepository {
    pool: PgPool,
}

impl RideRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_ride: NewRide) -> Result<Ride, AppError> {
        let ride = sqlx::query_as::<_, Ride>(
            r#"
            INSERT INTO rides (
                id, customer_id, pickup_location, drop_location, pickup_pincode, drop_pincode,
                ride_date, pickup_time, drop_time, status, price, cargo_type, weight_kg,
                required_vehicle_type, transporter_id, assigned_driver_id, assigned_vehicle_id,
                bidding_status, accepted_bid_id, pickup_completed, delivery_completed,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                    $18, NULL, FALSE, FALSE, $19, $19)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_ride.customer_id)
        .bind(new_ride.pickup_location)
        .bind(new_ride.drop_location)
        .bind(new_ride.pickup_pincode)
        .bind(new_ride.drop_pincode)
        .bind(new_ride.ride_date)
        .bind(new_ride.pickup_time)
        .bind(new_ride.drop_time)
        .bind(new_ride.status)
        .bind(new_ride.price)
        .bind(new_ride.cargo_type)
        .bind(new_ride.weight_kg)
        .bind(new_ride.required_vehicle_type)
        .bind(new_ride.transporter_id)
        .bind(new_ride.assigned_driver_id)
        .bind(new_ride.assigned_vehicle_id)
        .bind(new_ride.bidding_status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(ride)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Ride>, AppError> {
        let ride = sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ride)
    }

    /// Lock de fila para la unidad de aceptación de pujas. El segundo accept
    /// concurrente queda bloqueado acá hasta el commit del primero.
    pub async fn find_by_id_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Option<Ride>, AppError> {
        let ride = sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(ride)
    }

    pub async fn list(&self, filters: RideFilters) -> Result<Vec<Ride>, AppError> {
        let limit = if filters.limit <= 0 { 50 } else { filters.limit.min(100) };
        let offset = filters.offset.max(0);

        let rides = sqlx::query_as::<_, Ride>(
            r#"
            SELECT * FROM rides
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR customer_id = $2)
              AND ($3::uuid IS NULL OR transporter_id = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(filters.status)
        .bind(filters.customer_id)
        .bind(filters.transporter_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rides)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Ride, AppError> {
        let ride = sqlx::query_as::<_, Ride>(
            "UPDATE rides SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(ride)
    }

    pub async fn assign_driver_vehicle(
        &self,
        id: Uuid,
        driver_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<Ride, AppError> {
        let ride = sqlx::query_as::<_, Ride>(
            r#"
            UPDATE rides
            SET assigned_driver_id = $2, assigned_vehicle_id = $3, status = 'assigned',
                updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(driver_id)
        .bind(vehicle_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(ride)
    }

    /// Escritura de la aceptación: bid ganador, asignación y cierre de pujas
    /// en una sola sentencia dentro de la transacción del caller.
    pub async fn apply_bid_acceptance(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ride_id: Uuid,
        bid_id: Uuid,
        driver_id: Uuid,
        vehicle_id: Uuid,
        transporter_id: Uuid,
    ) -> Result<Ride, AppError> {
        let ride = sqlx::query_as::<_, Ride>(
            r#"
            UPDATE rides
            SET accepted_bid_id = $2, assigned_driver_id = $3, assigned_vehicle_id = $4,
                transporter_id = $5, bidding_status = 'closed', status = 'assigned',
                updated_at = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(ride_id)
        .bind(bid_id)
        .bind(driver_id)
        .bind(vehicle_id)
        .bind(transporter_id)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await?;

        Ok(ride)
    }

    pub async fn mark_pickup_complete(&self, id: Uuid) -> Result<Ride, AppError> {
        let ride = sqlx::query_as::<_, Ride>(
            r#"
            UPDATE rides
            SET pickup_completed = TRUE, pickup_completed_at = $2, updated_at = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(ride)
    }

    pub async fn mark_delivery_complete(&self, id: Uuid) -> Result<Ride, AppError> {
        let ride = sqlx::query_as::<_, Ride>(
            r#"
            UPDATE rides
            SET delivery_completed = TRUE, delivery_completed_at = $2, updated_at = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(ride)
    }

    /// Primer bid sobre un ride pending lo mueve a bid_placed. El WHERE con
    /// status = 'pending' hace la operación segura ante repeticiones.
    pub async fn mark_bid_placed(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE rides SET status = 'bid_placed', updated_at = $2 WHERE id = $1 AND status = 'pending'",
        )
        .bind(id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
