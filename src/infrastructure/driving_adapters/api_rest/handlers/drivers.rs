//! Driver Handlers
//!
//! HTTP handlers for driver CRUD operations.
//! All endpoints require an authenticated staff or superuser caller.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::domain::models::driver::DriverId;
use crate::infrastructure::driving_adapters::api_rest::dto::driver::{DriverRequestDto, DriverResponseDto};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::AdminUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for driver endpoints
///
/// Paths are served with and without the trailing slash.
pub fn router() -> Router<AppState> {
    let collection = get(list_drivers).post(create_driver);
    let item = get(get_driver_by_id)
        .put(update_driver)
        .patch(partial_update_driver)
        .delete(delete_driver);

    Router::new()
        .route("/api/drivers/", collection.clone())
        .route("/api/drivers", collection)
        .route("/api/drivers/:id/", item.clone())
        .route("/api/drivers/:id", item)
}

/// Non-numeric ids cannot match any driver
fn parse_id(id: &str) -> Result<DriverId, ApiError> {
    id.parse()
        .map_err(|_| ApiError::from(UseCaseError::not_found("Driver", id)))
}

/// GET /api/drivers/ - List all drivers, sorted by name
///
/// # Responses
///
/// * 200 OK - List of drivers
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 403 Forbidden - Caller is not staff or superuser
#[axum::debug_handler]
async fn list_drivers(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverResponseDto>>, ApiError> {
    let drivers = state.list_drivers_use_case.execute().await?;

    Ok(Json(drivers.into_iter().map(DriverResponseDto::from).collect()))
}

/// GET /api/drivers/:id/ - Get a driver by ID
///
/// # Responses
///
/// * 200 OK - Driver found
/// * 401 / 403 - Not authenticated / not an admin
/// * 404 Not Found - Driver does not exist
#[axum::debug_handler]
async fn get_driver_by_id(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    let driver_id = parse_id(&id)?;

    let driver = state.get_driver_by_id_use_case.execute(driver_id).await?;

    Ok(Json(DriverResponseDto::from(driver)))
}

/// POST /api/drivers/ - Create a new driver
///
/// # Responses
///
/// * 201 Created - Driver created, with its generated `driver_id`
/// * 400 Bad Request - Field validation error (e.g. `phone_number`)
/// * 401 / 403 - Not authenticated / not an admin
#[axum::debug_handler]
async fn create_driver(
    _admin: AdminUser,
    State(state): State<AppState>,
    payload: Result<Json<DriverRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<DriverResponseDto>), ApiError> {
    let Json(dto) = payload?;
    let data = dto.into_data()?;

    let driver = state.create_driver_use_case.execute(data).await?;

    Ok((StatusCode::CREATED, Json(DriverResponseDto::from(driver))))
}

/// PUT /api/drivers/:id/ - Full update of a driver
///
/// # Responses
///
/// * 200 OK - Driver updated
/// * 400 Bad Request - Field validation error
/// * 401 / 403 - Not authenticated / not an admin
/// * 404 Not Found - Driver does not exist
#[axum::debug_handler]
async fn update_driver(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DriverRequestDto>, JsonRejection>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    let driver_id = parse_id(&id)?;
    // a missing driver wins over a bad body
    state.get_driver_by_id_use_case.execute(driver_id).await?;
    let Json(dto) = payload?;
    let data = dto.into_data()?;

    let driver = state.update_driver_use_case.execute(driver_id, data).await?;

    Ok(Json(DriverResponseDto::from(driver)))
}

/// PATCH /api/drivers/:id/ - Partial update of a driver
///
/// # Responses
///
/// * 200 OK - Driver updated
/// * 400 Bad Request - A supplied field is invalid
/// * 401 / 403 - Not authenticated / not an admin
/// * 404 Not Found - Driver does not exist
#[axum::debug_handler]
async fn partial_update_driver(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DriverRequestDto>, JsonRejection>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    let driver_id = parse_id(&id)?;
    // a missing driver wins over a bad body
    state.get_driver_by_id_use_case.execute(driver_id).await?;
    let Json(dto) = payload?;
    let patch = dto.into_patch()?;

    let driver = state.partial_update_driver_use_case.execute(driver_id, patch).await?;

    Ok(Json(DriverResponseDto::from(driver)))
}

/// DELETE /api/drivers/:id/ - Delete a driver, unassigning it from buses
///
/// # Responses
///
/// * 204 No Content - Driver deleted
/// * 401 / 403 - Not authenticated / not an admin
/// * 404 Not Found - Driver does not exist
#[axum::debug_handler]
async fn delete_driver(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let driver_id = parse_id(&id)?;

    state.delete_driver_use_case.execute(driver_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
