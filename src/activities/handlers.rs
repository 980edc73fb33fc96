use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::ActivityService,
    types::{ActivityResponse, EmailQuery, MessageResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for listing all activities
///
/// GET /activities
/// Returns a JSON object mapping activity name to its details
#[instrument(name = "list_activities", skip(state))]
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, ActivityResponse>>, AppError> {
    info!("Listing all activities");

    // Use injected repository from app state
    let service = ActivityService::new(Arc::clone(&state.roster));
    let activities = service.list_activities().await?;

    info!(
        activity_count = activities.len(),
        "Activities listed successfully"
    );

    Ok(Json(activities))
}

/// HTTP handler for signing a student up for an activity
///
/// POST /activities/{activity_name}/signup?email={email}
/// The activity name is percent-decoded from the path by the Path extractor
#[instrument(name = "signup_for_activity", skip(state))]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    info!(activity = %activity_name, email = %query.email, "Signup requested");

    // Use injected repository from app state
    let service = ActivityService::new(Arc::clone(&state.roster));
    let response = service.signup(&activity_name, &query.email).await?;

    Ok(Json(response))
}

/// HTTP handler for removing a participant from an activity
///
/// DELETE /activities/{activity_name}/participants?email={email}
#[instrument(name = "unregister_participant", skip(state))]
pub async fn unregister_participant(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    info!(activity = %activity_name, email = %query.email, "Unregister requested");

    // Use injected repository from app state
    let service = ActivityService::new(Arc::clone(&state.roster));
    let response = service.unregister(&activity_name, &query.email).await?;

    Ok(Json(response))
}
