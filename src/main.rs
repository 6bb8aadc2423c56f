use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exercise_tracker_server::routes::{
    add_exercise, create_user, get_log, health_check, list_users,
};
use exercise_tracker_server::{new_store, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exercise_tracker_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Exercise Tracker Server...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Environment: {}, Server: {}",
        config.environment,
        config.server_address()
    );

    // Configure CORS (the API is open to any origin)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Create app state; all data lives in memory for the process lifetime
    let state = AppState::new(new_store(), config.clone());

    // Build router
    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/:user_id/exercises", post(add_exercise))
        .route("/api/users/:user_id/logs", get(get_log))
        .layer(cors)
        .with_state(state);

    if config.log_requests {
        app = app.layer(TraceLayer::new_for_http());
    }

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
