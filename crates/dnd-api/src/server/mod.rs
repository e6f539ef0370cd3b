//! Server setup and initialization
//!
//! Builds the storage backend, the application router, and runs the server
//! until Ctrl-C or SIGTERM.

use std::sync::Arc;

use axum::Router;
use dnd_common::{AppConfig, AppError, ConfigError, StorageBackend};
use dnd_db::{
    create_pool, run_migrations, InMemoryStore, PgCharacterRepository, PgClassRepository,
    PgSpeciesRepository,
};
use dnd_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router(), state.config());
    router.with_state(state)
}

/// Wire the repositories for the configured storage backend
pub async fn create_service_context(config: &AppConfig) -> Result<ServiceContext, AppError> {
    let builder = ServiceContextBuilder::new();

    let builder = match config.storage {
        StorageBackend::Memory => {
            info!("Using seeded in-memory storage");
            builder.store(InMemoryStore::seeded())
        }
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or(ConfigError::MissingVar("DATABASE_URL"))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&dnd_db::DatabaseConfig::from(database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if database.run_migrations {
                run_migrations(&pool)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                info!("Migrations applied");
            }

            builder
                .character_repo(Arc::new(PgCharacterRepository::new(pool.clone())))
                .species_repo(Arc::new(PgSpeciesRepository::new(pool.clone())))
                .class_repo(Arc::new(PgClassRepository::new(pool)))
        }
    };

    builder.build().map_err(|e| AppError::Server(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let service_context = create_service_context(&config).await?;
    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.server.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &address).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
