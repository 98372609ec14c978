//! Bus Fleet Admin API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bus_fleet_admin::infrastructure::driven_adapters::config::{AppConfig, LogFormat, LoggingConfig};
use bus_fleet_admin::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use bus_fleet_admin::infrastructure::driven_adapters::{PostgresBusRepository, PostgresDriverRepository};
use bus_fleet_admin::infrastructure::driving_adapters::api_rest::{build_router, AppState};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let driver_repository = Arc::new(PostgresDriverRepository::new(pool.clone()));
    let bus_repository = Arc::new(PostgresBusRepository::new(pool));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app_state = AppState::new(Arc::new(config), driver_repository, bus_repository);
    let app = build_router(app_state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
