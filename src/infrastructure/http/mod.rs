pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    activity::ActivityController, auth::AuthController, digest::DigestController, health, root,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Assemble every route with its middleware stack
pub fn build_router(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    auth_controller: Arc<AuthController>,
    digest_controller: Arc<DigestController>,
    activity_controller: Arc<ActivityController>,
) -> Router {
    let root_routes = Router::new()
        .route("/", get(root::home))
        .route("/test", get(root::test))
        .with_state(config.clone());

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state((pool, config));

    let digest_routes = Router::new()
        .route("/api/digest", post(DigestController::create_digest))
        .with_state(digest_controller);

    let auth_routes = Router::new()
        .route("/api/register", post(AuthController::register))
        .route("/api/login", post(AuthController::login))
        .with_state(auth_controller);

    let activity_routes = Router::new()
        .route("/api/activity", post(ActivityController::record))
        .with_state(activity_controller);

    Router::new()
        .merge(root_routes)
        .merge(health_routes)
        .merge(digest_routes)
        .merge(auth_routes)
        .merge(activity_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
