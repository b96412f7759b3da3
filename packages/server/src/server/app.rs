//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::ServerDeps;
use crate::server::routes::{form_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router from configuration.
pub fn build_app(config: &Config) -> Router {
    let deps = Arc::new(ServerDeps::from_config(config.airtable.clone()));
    build_app_with_deps(deps, &config.allowed_origins)
}

/// Router construction split out so tests can inject their own dependencies.
pub fn build_app_with_deps(deps: Arc<ServerDeps>, allowed_origins: &[String]) -> Router {
    // An empty origin list means "no separate web origin", e.g. local
    // development with the web app proxying to us.
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE])
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/forms", post(form_handler))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .with_state(AxumAppState { deps })
}
