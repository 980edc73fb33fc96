// Library crate for the Mergington High School activities API
// This file exposes the router and store types for integration tests

pub mod activities;
pub mod shared;

use axum::response::Redirect;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Re-export commonly used types for easier access in tests
pub use activities::models::Activity;
pub use activities::repository::{InMemoryRosterRepository, RosterRepository};
pub use shared::{AppError, AppState};

/// Builds the application router: the three API routes, the static
/// frontend, and the middleware stack
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(activities::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_for_activity),
        )
        .route(
            "/activities/:activity_name/participants",
            delete(activities::unregister_participant),
        )
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
