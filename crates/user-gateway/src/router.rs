//! Router construction for the User Gateway.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    // Health check routes
    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .with_state(state.clone());

    // User pass-through routes
    let user_routes = Router::new()
        .route("/users", get(handlers::users::list))
        .route(
            "/users/{id}",
            get(handlers::users::get).put(handlers::users::update),
        )
        .with_state(state.clone());

    // Process route, with the user lookup in front of the handler
    let process_routes = Router::new()
        .route("/process", post(handlers::process))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::fetch_user,
        ))
        .with_state(state);

    Router::new()
        .merge(health_routes)
        .merge(user_routes)
        .merge(process_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    match config.cors_origins() {
        Some(origins) => {
            tracing::info!("CORS allowed origins: {:?}", origins);
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            cors.allow_origin(AllowOrigin::list(allowed))
        }
        None => cors.allow_origin(Any),
    }
}
