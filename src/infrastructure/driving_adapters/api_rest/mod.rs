//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateBusUseCase, CreateDriverUseCase, DeleteBusUseCase, DeleteDriverUseCase, GetBusByIdUseCase,
    GetDriverByIdUseCase, ListBusesUseCase, ListDriversUseCase, PartialUpdateBusUseCase,
    PartialUpdateDriverUseCase, UpdateBusUseCase, UpdateDriverUseCase,
};
use crate::domain::gateways::{BusRepository, DriverRepository};
use crate::infrastructure::driven_adapters::config::{AppConfig, ServerConfig};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub list_drivers_use_case: Arc<ListDriversUseCase>,
    pub get_driver_by_id_use_case: Arc<GetDriverByIdUseCase>,
    pub create_driver_use_case: Arc<CreateDriverUseCase>,
    pub update_driver_use_case: Arc<UpdateDriverUseCase>,
    pub partial_update_driver_use_case: Arc<PartialUpdateDriverUseCase>,
    pub delete_driver_use_case: Arc<DeleteDriverUseCase>,
    pub list_buses_use_case: Arc<ListBusesUseCase>,
    pub get_bus_by_id_use_case: Arc<GetBusByIdUseCase>,
    pub create_bus_use_case: Arc<CreateBusUseCase>,
    pub update_bus_use_case: Arc<UpdateBusUseCase>,
    pub partial_update_bus_use_case: Arc<PartialUpdateBusUseCase>,
    pub delete_bus_use_case: Arc<DeleteBusUseCase>,
}

impl AppState {
    /// Wire every use case against the given repositories
    pub fn new(
        config: Arc<AppConfig>,
        driver_repository: Arc<dyn DriverRepository>,
        bus_repository: Arc<dyn BusRepository>,
    ) -> Self {
        Self {
            config,
            list_drivers_use_case: Arc::new(ListDriversUseCase::new(driver_repository.clone())),
            get_driver_by_id_use_case: Arc::new(GetDriverByIdUseCase::new(driver_repository.clone())),
            create_driver_use_case: Arc::new(CreateDriverUseCase::new(driver_repository.clone())),
            update_driver_use_case: Arc::new(UpdateDriverUseCase::new(driver_repository.clone())),
            partial_update_driver_use_case: Arc::new(PartialUpdateDriverUseCase::new(driver_repository.clone())),
            delete_driver_use_case: Arc::new(DeleteDriverUseCase::new(driver_repository.clone())),
            list_buses_use_case: Arc::new(ListBusesUseCase::new(bus_repository.clone())),
            get_bus_by_id_use_case: Arc::new(GetBusByIdUseCase::new(bus_repository.clone())),
            create_bus_use_case: Arc::new(CreateBusUseCase::new(bus_repository.clone(), driver_repository.clone())),
            update_bus_use_case: Arc::new(UpdateBusUseCase::new(bus_repository.clone(), driver_repository.clone())),
            partial_update_bus_use_case: Arc::new(PartialUpdateBusUseCase::new(
                bus_repository.clone(),
                driver_repository,
            )),
            delete_bus_use_case: Arc::new(DeleteBusUseCase::new(bus_repository)),
        }
    }
}

/// Build the full HTTP router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server);

    Router::new()
        .merge(handlers::health::router())
        .merge(handlers::drivers::router())
        .merge(handlers::buses::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::add_config_extension,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if server.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
