mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::token_cleanup, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::prepare_upload_dir(&config).await?;

    let state = AppState::new(db, &config);

    // Check for admin users and create the bootstrap admin if none exist
    startup::check_for_admin(&state, &config).await?;

    // Keep the scheduler handle alive for the lifetime of the server
    let _scheduler = token_cleanup::start_scheduler(state.db.clone()).await?;

    let app = router::router(state, &config)?;

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
