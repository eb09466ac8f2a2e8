use crate::{
    ApiError, AppState, create_action, create_project, delete_action, delete_project, get_action,
    get_project, health, list_actions, list_project_actions, list_projects, request_logger,
    request_timeout, require_action, update_action, update_project,
};

use std::panic::Location;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
};
use error_location::ErrorLocation;
use http::{HeaderName, HeaderValue, Uri};
use tower::{Layer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Router wrapped so `/api/projects/` and `/api/projects` resolve alike
pub type App = NormalizePath<Router>;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> App {
    let max_body_bytes = state.max_body_bytes;

    let router = Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // REST API
        .nest("/api/projects", project_routes())
        .nest("/api/actions", action_routes(state.clone()))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_logger))
                .layer(security_header("x-content-type-options", "nosniff"))
                .layer(security_header("x-frame-options", "SAMEORIGIN"))
                .layer(security_header("referrer-policy", "no-referrer"))
                .layer(security_header("x-dns-prefetch-control", "off"))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(DefaultBodyLimit::max(max_body_bytes))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    request_timeout,
                )),
        )
        .with_state(state);

    // Must wrap the router: a `Router::layer` runs after route matching
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/{id}/actions", get(list_project_actions))
}

fn action_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_actions).post(create_action))
        .route("/{id}", get(get_action).delete(delete_action))
        // Existence check runs before the body is read
        .route(
            "/{id}",
            put(update_action).route_layer(middleware::from_fn_with_state(state, require_action)),
        )
}

/// Response header added unless the handler already set it
fn security_header(name: &'static str, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        message: format!("No route for {}", uri.path()),
        location: ErrorLocation::from(Location::caller()),
    }
}
