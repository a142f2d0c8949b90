//! # Kinship Server
//!
//! Main entry point for the Kinship social-graph service.

use kinship_config::ConfigLoader;
use kinship_core::{KinshipError, KinshipResult};
use kinship_repository::{create_pool, PgFriendshipRepository, PgUserRepository};
use kinship_rest::{create_router, AppState};
use kinship_service::{FriendServiceImpl, UserService, UserServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Kinship server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> KinshipResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Create database pool and run migrations
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Constructor composition: repositories, then services, then state.
    let user_repository = Arc::new(PgUserRepository::new(db_pool.clone()));
    let friendship_repository = Arc::new(PgFriendshipRepository::new(db_pool.clone()));

    let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(user_repository));
    let friend_service = Arc::new(FriendServiceImpl::new(
        friendship_repository,
        user_service.clone(),
    ));

    let state = AppState::new(
        user_service,
        friend_service,
        config.pagination.clone(),
    );

    let router = create_router(state, &config.server);

    // Start HTTP server
    let addr = config.server.addr();
    startup::print_startup_info(&addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| KinshipError::Internal(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| KinshipError::Internal(format!("Server error: {}", e)))?;

    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kinship=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
