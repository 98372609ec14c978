//! PostgreSQL Bus Repository Implementation
//!
//! Every read joins the assigned driver so buses come back resolved.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::BusRepository;
use crate::domain::models::bus::{Bus, BusData, BusId};
use crate::domain::models::driver::{Driver, DriverId};
use crate::shared::errors::RepositoryError;

/// Bus row left-joined with its driver
#[derive(Debug, sqlx::FromRow)]
struct BusRow {
    id: i32,
    bus_name: String,
    route: String,
    driver_id: Option<i32>,
    driver_name: Option<String>,
    driver_phone_number: Option<String>,
}

impl From<BusRow> for Bus {
    fn from(row: BusRow) -> Self {
        let driver = match (row.driver_id, row.driver_name, row.driver_phone_number) {
            (Some(id), Some(name), Some(phone_number)) => {
                Some(Driver::restore(DriverId::new(id), name, phone_number))
            }
            _ => None,
        };
        Bus::restore(BusId::new(row.id), row.bus_name, row.route, driver)
    }
}

const SELECT_BUS: &str = r#"
    SELECT b.id, b.bus_name, b.route,
           d.driver_id, d.name AS driver_name, d.phone_number AS driver_phone_number
    FROM buses b
    LEFT JOIN drivers d ON d.driver_id = b.assigned_driver_id
"#;

/// Map a write failure, singling out foreign key violations
fn write_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            RepositoryError::DanglingReference(db_err.constraint().unwrap_or("assigned_driver_id").to_string())
        }
        other => RepositoryError::Database(other),
    }
}

/// PostgreSQL implementation of BusRepository
pub struct PostgresBusRepository {
    pool: PgPool,
}

impl PostgresBusRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusRepository for PostgresBusRepository {
    async fn find_all(&self) -> Result<Vec<Bus>, RepositoryError> {
        let rows = sqlx::query_as::<_, BusRow>(&format!("{SELECT_BUS} ORDER BY b.bus_name ASC, b.id ASC"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Bus::from).collect())
    }

    async fn find_by_id(&self, id: BusId) -> Result<Option<Bus>, RepositoryError> {
        let row = sqlx::query_as::<_, BusRow>(&format!("{SELECT_BUS} WHERE b.id = $1"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Bus::from))
    }

    async fn create(&self, data: &BusData) -> Result<Bus, RepositoryError> {
        let row = sqlx::query_as::<_, BusRow>(
            r#"
            WITH inserted AS (
                INSERT INTO buses (bus_name, route, assigned_driver_id)
                VALUES ($1, $2, $3)
                RETURNING id, bus_name, route, assigned_driver_id
            )
            SELECT i.id, i.bus_name, i.route,
                   d.driver_id, d.name AS driver_name, d.phone_number AS driver_phone_number
            FROM inserted i
            LEFT JOIN drivers d ON d.driver_id = i.assigned_driver_id
            "#,
        )
        .bind(&data.bus_name)
        .bind(&data.route)
        .bind(data.assigned_driver_id.map(DriverId::value))
        .fetch_one(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(row.into())
    }

    async fn update(&self, id: BusId, data: &BusData) -> Result<Option<Bus>, RepositoryError> {
        let row = sqlx::query_as::<_, BusRow>(
            r#"
            WITH updated AS (
                UPDATE buses
                SET bus_name = $2,
                    route = $3,
                    assigned_driver_id = $4
                WHERE id = $1
                RETURNING id, bus_name, route, assigned_driver_id
            )
            SELECT u.id, u.bus_name, u.route,
                   d.driver_id, d.name AS driver_name, d.phone_number AS driver_phone_number
            FROM updated u
            LEFT JOIN drivers d ON d.driver_id = u.assigned_driver_id
            "#,
        )
        .bind(id.value())
        .bind(&data.bus_name)
        .bind(&data.route)
        .bind(data.assigned_driver_id.map(DriverId::value))
        .fetch_optional(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(row.map(Bus::from))
    }

    async fn delete(&self, id: BusId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM buses WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
