use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::activities::repository::RosterRepository;

/// Shared application state containing all dependencies
///
/// The roster is an injected trait object rather than a module-level global,
/// which keeps concurrency control and test seams explicit.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<dyn RosterRepository + Send + Sync>,
}

impl AppState {
    pub fn new(roster: Arc<dyn RosterRepository + Send + Sync>) -> Self {
        Self { roster }
    }
}

/// Error taxonomy surfaced to API callers
///
/// Every variant maps to a 4xx response; none are retried and none are fatal
/// to the process.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("Already signed up for this activity")]
    AlreadyRegistered,

    #[error("Activity is full")]
    ActivityFull,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::ActivityNotFound | AppError::ParticipantNotFound => StatusCode::NOT_FOUND,
            AppError::AlreadyRegistered | AppError::ActivityFull => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}
