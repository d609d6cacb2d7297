use ob_auth::TokenCodec;
use ob_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ob_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ob-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = ob_db::open_pool(&database_path).await?;

    info!("Running database migrations...");
    ob_db::migrate(&pool).await?;
    info!("Migrations complete");

    // validate() guarantees the secret is present; an empty one still fails here
    let secret = config.auth.jwt_secret.as_deref().unwrap_or_default();
    let codec = Arc::new(TokenCodec::new(secret.as_bytes())?);
    info!("Token codec ready: {:?}", codec);

    let app_state = AppState::new(pool.clone(), codec, config.auth.token_ttl());
    let app = build_router(app_state, config.server.request_timeout());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
