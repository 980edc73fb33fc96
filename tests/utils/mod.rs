use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use mergington::activities::catalog::default_catalog;
use mergington::activities::types::ActivityResponse;
use mergington::{app, Activity, AppState, InMemoryRosterRepository};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Builds the full application router over the default catalog
pub fn seeded_app() -> Router {
    let repository = Arc::new(InMemoryRosterRepository::with_activities(default_catalog()));
    app(AppState::new(repository))
}

/// Builds the full application router over a custom roster, returning the
/// shared repository handle for direct state assertions
pub fn app_with(
    activities: Vec<(String, Activity)>,
) -> (Arc<InMemoryRosterRepository>, Router) {
    let repository = Arc::new(InMemoryRosterRepository::with_activities(activities));
    let router = app(AppState::new(repository.clone()));
    (repository, router)
}

/// Creates an activity for custom rosters
pub fn activity(max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "A test activity".to_string(),
        schedule: "Mondays, 3:30 PM - 5:00 PM".to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// Sends one request through a clone of the router
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Decodes a response body as JSON
pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Fetches GET /activities and decodes it into the typed mapping
pub async fn fetch_activities(app: &Router) -> BTreeMap<String, ActivityResponse> {
    let response = send(app, get("/activities")).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}
