//! Persistence gateway for the `wishes` table.
//!
//! Every mutating operation validates its input before any statement is sent,
//! so invalid data never reaches storage.

use sqlx::types::chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::{validate_fields, Wish, WishPayload};

/// Column list for wishes queries.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Failure of a gateway operation, tagged by kind.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Wish with ID {0} not found")]
    NotFound(Uuid),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// CRUD operations on wishes.
pub struct WishRepo;

impl WishRepo {
    /// All wishes in storage order.
    pub async fn list_all(pool: &PgPool) -> GatewayResult<Vec<Wish>> {
        let query = format!("SELECT {COLUMNS} FROM wishes");
        let wishes = sqlx::query_as::<_, Wish>(&query).fetch_all(pool).await?;
        Ok(wishes)
    }

    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> GatewayResult<Wish> {
        let query = format!("SELECT {COLUMNS} FROM wishes WHERE id = $1");
        sqlx::query_as::<_, Wish>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(GatewayError::NotFound(id))
    }

    /// Persist a fully populated record.
    pub async fn insert(pool: &PgPool, wish: &Wish) -> GatewayResult<()> {
        validate_fields(&wish.name, &wish.description).map_err(GatewayError::Validation)?;

        sqlx::query(
            r#"
            INSERT INTO wishes (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(wish.id)
        .bind(&wish.name)
        .bind(&wish.description)
        .bind(wish.created_at)
        .bind(wish.updated_at)
        .execute(pool)
        .await?;

        debug!(id = %wish.id, "Inserted wish");
        Ok(())
    }

    /// Replace name and description, stamping `updated_at`.
    ///
    /// An unknown id is reported as `NotFound` even when the payload is also
    /// invalid.
    pub async fn update_by_id(
        pool: &PgPool,
        id: Uuid,
        payload: &WishPayload,
    ) -> GatewayResult<Wish> {
        if let Err(message) = payload.validate() {
            return if Self::exists(pool, id).await? {
                Err(GatewayError::Validation(message))
            } else {
                Err(GatewayError::NotFound(id))
            };
        }

        let query = format!(
            "UPDATE wishes
             SET name = $1, description = $2, updated_at = GREATEST($3, created_at)
             WHERE id = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wish>(&query)
            .bind(&payload.name)
            .bind(&payload.description)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(GatewayError::NotFound(id))
    }

    /// Hard delete. Zero affected rows means the id was unknown.
    pub async fn delete_by_id(pool: &PgPool, id: Uuid) -> GatewayResult<()> {
        let result = sqlx::query("DELETE FROM wishes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound(id));
        }
        Ok(())
    }

    async fn exists(pool: &PgPool, id: Uuid) -> GatewayResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM wishes WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
