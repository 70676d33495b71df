use crate::handlers::{analyze::analyze, health::health_check};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Added to the upstream timeout; the middleware must not fire before the
/// proxy reports its own 504.
const TIMEOUT_SLACK: Duration = Duration::from_secs(5);

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = state.config.request_timeout() + TIMEOUT_SLACK;
    let frontend = frontend_service(&state.config.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Analysis proxy
        .route("/api/analyze", post(analyze))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Built frontend, unknown paths get the single page
        .fallback_service(frontend)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn frontend_service(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}
