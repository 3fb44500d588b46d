//! Application route configuration.

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    create_booking, delete_booking, get_service, issue_token, list_bookings, list_services,
    update_booking_status,
};
use super::middleware::auth_middleware;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(root))
        // Token issuance
        .route("/jwt", post(issue_token))
        // Service catalog (public)
        .route("/services", get(list_services))
        .route("/services/:id", get(get_service))
        // Bookings: only the listing requires a bearer token, the
        // route_layer is applied before the open POST is added
        .route(
            "/bookings",
            get(list_bookings)
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                ))
                .post(create_booking),
        )
        .route(
            "/bookings/:id",
            patch(update_booking_status).delete(delete_booking),
        )
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "car doctor running"
}
