use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mergington::activities::catalog::default_catalog;
use mergington::activities::repository::InMemoryRosterRepository;
use mergington::shared::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mergington=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mergington High School activities server");

    // Seed the roster once; it lives for the whole process and is shared
    // with request handlers through the application state
    let roster = Arc::new(InMemoryRosterRepository::with_activities(default_catalog()));
    info!(
        activity_count = roster.activity_count(),
        "Roster seeded from the default catalog"
    );

    let app_state = AppState::new(roster);
    let app = mergington::app(app_state);

    // run our app with hyper, listening globally on port 8000
    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
    info!("Server running on http://localhost:8000");
    axum::serve(listener, app).await.unwrap();
}
