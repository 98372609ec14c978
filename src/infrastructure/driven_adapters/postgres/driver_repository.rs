//! PostgreSQL Driver Repository Implementation
//!
//! Implements the DriverRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverData, DriverId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the drivers table
#[derive(Debug, sqlx::FromRow)]
struct DriverRow {
    driver_id: i32,
    name: String,
    phone_number: String,
}

impl From<DriverRow> for Driver {
    fn from(row: DriverRow) -> Self {
        Driver::restore(DriverId::new(row.driver_id), row.name, row.phone_number)
    }
}

/// PostgreSQL implementation of DriverRepository
pub struct PostgresDriverRepository {
    pool: PgPool,
}

impl PostgresDriverRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError> {
        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT driver_id, name, phone_number
            FROM drivers
            ORDER BY name ASC, driver_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Driver::from).collect())
    }

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT driver_id, name, phone_number
            FROM drivers
            WHERE driver_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn exists(&self, id: DriverId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM drivers WHERE driver_id = $1)
            "#,
        )
        .bind(id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, data: &DriverData) -> Result<Driver, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            INSERT INTO drivers (name, phone_number)
            VALUES ($1, $2)
            RETURNING driver_id, name, phone_number
            "#,
        )
        .bind(&data.name)
        .bind(&data.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: DriverId, data: &DriverData) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            UPDATE drivers
            SET name = $2,
                phone_number = $3
            WHERE driver_id = $1
            RETURNING driver_id, name, phone_number
            "#,
        )
        .bind(id.value())
        .bind(&data.name)
        .bind(&data.phone_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn delete(&self, id: DriverId) -> Result<bool, RepositoryError> {
        // buses.assigned_driver_id is ON DELETE SET NULL
        let result = sqlx::query(
            r#"
            DELETE FROM drivers
            WHERE driver_id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
