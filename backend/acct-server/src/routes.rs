use crate::{AppState, CallableError, DELETE_USER_ACCOUNT_PATH, delete_user_account, health};

use acct_config::ServerConfig;

use std::time::Duration;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::timeout::{TimeoutLayer, error::Elapsed};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let mut router = Router::new()
        // Callable endpoint
        .route(DELETE_USER_ACCOUNT_PATH, post(delete_user_account))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics_export))
        .with_state(state);

    if server.request_timeout_secs > 0 {
        router = router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    server.request_timeout_secs,
                ))),
        );
    }

    router
        .layer(GlobalConcurrencyLimitLayer::new(server.max_connections))
        // Callable clients run in browsers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Middleware failures use the callable error envelope like everything else
async fn handle_middleware_error(err: BoxError) -> Response {
    if err.is::<Elapsed>() {
        log::warn!("Request timed out; any deletion in progress keeps running");
    } else {
        log::error!("Unhandled middleware error: {}", err);
    }

    CallableError::internal().into_response()
}
