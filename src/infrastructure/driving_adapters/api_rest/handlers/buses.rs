//! Bus Handlers
//!
//! HTTP handlers for bus CRUD operations.
//! All endpoints require an authenticated staff or superuser caller.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::domain::models::bus::BusId;
use crate::infrastructure::driving_adapters::api_rest::dto::bus::{BusRequestDto, BusResponseDto};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::AdminUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for bus endpoints
pub fn router() -> Router<AppState> {
    let collection = get(list_buses).post(create_bus);
    let item = get(get_bus_by_id)
        .put(update_bus)
        .patch(partial_update_bus)
        .delete(delete_bus);

    Router::new()
        .route("/api/buses/", collection.clone())
        .route("/api/buses", collection)
        .route("/api/buses/:id/", item.clone())
        .route("/api/buses/:id", item)
}

fn parse_id(id: &str) -> Result<BusId, ApiError> {
    id.parse()
        .map_err(|_| ApiError::from(UseCaseError::not_found("Bus", id)))
}

/// GET /api/buses/ - List all buses with their drivers
#[axum::debug_handler]
async fn list_buses(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<BusResponseDto>>, ApiError> {
    let buses = state.list_buses_use_case.execute().await?;

    Ok(Json(buses.into_iter().map(BusResponseDto::from).collect()))
}

/// GET /api/buses/:id/ - Get a bus by ID
#[axum::debug_handler]
async fn get_bus_by_id(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BusResponseDto>, ApiError> {
    let bus_id = parse_id(&id)?;

    let bus = state.get_bus_by_id_use_case.execute(bus_id).await?;

    Ok(Json(BusResponseDto::from(bus)))
}

/// POST /api/buses/ - Create a new bus
///
/// # Responses
///
/// * 201 Created - Bus created, driver resolved under `assigned_driver`
/// * 400 Bad Request - Blank `bus_name`/`route`, or unknown `assigned_driver_id`
/// * 401 / 403 - Not authenticated / not an admin
#[axum::debug_handler]
async fn create_bus(
    _admin: AdminUser,
    State(state): State<AppState>,
    payload: Result<Json<BusRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<BusResponseDto>), ApiError> {
    let Json(dto) = payload?;
    let data = dto.into_data()?;

    let bus = state.create_bus_use_case.execute(data).await?;

    Ok((StatusCode::CREATED, Json(BusResponseDto::from(bus))))
}

/// PUT /api/buses/:id/ - Full update of a bus
///
/// # Responses
///
/// * 200 OK - Bus updated
/// * 400 Bad Request - Field validation error
/// * 401 / 403 - Not authenticated / not an admin
/// * 404 Not Found - Bus does not exist
#[axum::debug_handler]
async fn update_bus(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BusRequestDto>, JsonRejection>,
) -> Result<Json<BusResponseDto>, ApiError> {
    let bus_id = parse_id(&id)?;
    // a missing bus wins over a bad body
    state.get_bus_by_id_use_case.execute(bus_id).await?;
    let Json(dto) = payload?;
    let data = dto.into_data()?;

    let bus = state.update_bus_use_case.execute(bus_id, data).await?;

    Ok(Json(BusResponseDto::from(bus)))
}

/// PATCH /api/buses/:id/ - Partial update of a bus
#[axum::debug_handler]
async fn partial_update_bus(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BusRequestDto>, JsonRejection>,
) -> Result<Json<BusResponseDto>, ApiError> {
    let bus_id = parse_id(&id)?;
    // a missing bus wins over a bad body
    state.get_bus_by_id_use_case.execute(bus_id).await?;
    let Json(dto) = payload?;
    let patch = dto.into_patch()?;

    let bus = state.partial_update_bus_use_case.execute(bus_id, patch).await?;

    Ok(Json(BusResponseDto::from(bus)))
}

/// DELETE /api/buses/:id/ - Delete a bus
#[axum::debug_handler]
async fn delete_bus(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let bus_id = parse_id(&id)?;

    state.delete_bus_use_case.execute(bus_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
