use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    repository::{RosterRepository, SignupResult, UnregisterResult},
    types::{ActivityResponse, MessageResponse},
};
use crate::shared::AppError;

/// Service for handling activity roster business logic
pub struct ActivityService {
    repository: Arc<dyn RosterRepository + Send + Sync>,
}

impl ActivityService {
    pub fn new(repository: Arc<dyn RosterRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Returns every activity keyed by name, in the public response shape
    #[instrument(skip(self))]
    pub async fn list_activities(&self) -> Result<BTreeMap<String, ActivityResponse>, AppError> {
        debug!("Listing all activities");

        let activities = self.repository.list_activities().await?;

        info!(
            activity_count = activities.len(),
            "Activities retrieved successfully"
        );

        // Convert to response format, keeping the name as the mapping key
        Ok(activities
            .into_iter()
            .map(|(name, activity)| {
                let response = ActivityResponse {
                    description: activity.description,
                    schedule: activity.schedule,
                    max_participants: activity.max_participants,
                    participants: activity.participants,
                };
                (name, response)
            })
            .collect())
    }

    /// Signs an email up for an activity and formats the confirmation message
    #[instrument(skip(self))]
    pub async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, AppError> {
        info!(activity = %activity_name, email = %email, "Attempting to sign up");

        // Use the atomic signup method
        let result = self.repository.signup(activity_name, email).await?;

        match result {
            SignupResult::Success(activity) => {
                info!(
                    activity = %activity_name,
                    email = %email,
                    participant_count = activity.participant_count(),
                    "Signup recorded successfully"
                );
                Ok(MessageResponse {
                    message: format!("Signed up {} for {}", email, activity_name),
                })
            }
            SignupResult::ActivityNotFound => {
                debug!(activity = %activity_name, "Signup rejected: activity not found");
                Err(AppError::ActivityNotFound)
            }
            SignupResult::AlreadyRegistered => {
                debug!(
                    activity = %activity_name,
                    email = %email,
                    "Signup rejected: already registered"
                );
                Err(AppError::AlreadyRegistered)
            }
            SignupResult::ActivityFull => {
                debug!(activity = %activity_name, "Signup rejected: activity full");
                Err(AppError::ActivityFull)
            }
        }
    }

    /// Removes an email from an activity and formats the confirmation message
    #[instrument(skip(self))]
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, AppError> {
        info!(activity = %activity_name, email = %email, "Attempting to unregister");

        // Use the atomic unregister method
        let result = self.repository.unregister(activity_name, email).await?;

        match result {
            UnregisterResult::Success(activity) => {
                info!(
                    activity = %activity_name,
                    email = %email,
                    participant_count = activity.participant_count(),
                    "Unregister recorded successfully"
                );
                Ok(MessageResponse {
                    message: format!("Removed {} from {}", email, activity_name),
                })
            }
            UnregisterResult::ActivityNotFound => {
                debug!(activity = %activity_name, "Unregister rejected: activity not found");
                Err(AppError::ActivityNotFound)
            }
            UnregisterResult::ParticipantNotFound => {
                debug!(
                    activity = %activity_name,
                    email = %email,
                    "Unregister rejected: participant not found"
                );
                Err(AppError::ParticipantNotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::models::Activity;
    use crate::activities::repository::InMemoryRosterRepository;

    fn seeded_service() -> (Arc<InMemoryRosterRepository>, ActivityService) {
        let repo = Arc::new(InMemoryRosterRepository::with_activities(vec![
            (
                "Chess Club".to_string(),
                Activity {
                    description: "Learn strategies and compete in chess tournaments".to_string(),
                    schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                    max_participants: 2,
                    participants: vec!["michael@mergington.edu".to_string()],
                },
            ),
            (
                "Tennis Club".to_string(),
                Activity {
                    description: "Practice serves and rallies on the school courts".to_string(),
                    schedule: "Mondays and Wednesdays, 3:30 PM - 5:00 PM".to_string(),
                    max_participants: 16,
                    participants: vec![
                        "liam@mergington.edu".to_string(),
                        "ava@mergington.edu".to_string(),
                    ],
                },
            ),
        ]));
        let service = ActivityService::new(repo.clone());
        (repo, service)
    }

    #[tokio::test]
    async fn test_list_activities_keeps_names_as_keys() {
        let (_repo, service) = seeded_service();

        let activities = service.list_activities().await.unwrap();

        assert_eq!(activities.len(), 2);
        assert!(activities.contains_key("Chess Club"));
        assert!(activities.contains_key("Tennis Club"));
        assert_eq!(
            activities["Tennis Club"].participants,
            vec!["liam@mergington.edu", "ava@mergington.edu"]
        );
        assert_eq!(activities["Chess Club"].max_participants, 2);
    }

    #[tokio::test]
    async fn test_signup_formats_confirmation_message() {
        let (repo, service) = seeded_service();

        let response = service
            .signup("Tennis Club", "tester@mergington.edu")
            .await
            .unwrap();

        assert_eq!(
            response.message,
            "Signed up tester@mergington.edu for Tennis Club"
        );

        let activity = repo.get_activity("Tennis Club").await.unwrap().unwrap();
        assert_eq!(activity.participant_count(), 3);
        assert!(activity.has_participant("tester@mergington.edu"));
    }

    #[tokio::test]
    async fn test_signup_unknown_activity_maps_to_not_found() {
        let (_repo, service) = seeded_service();

        let result = service
            .signup("Knitting Circle", "tester@mergington.edu")
            .await;

        assert!(matches!(result, Err(AppError::ActivityNotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_signup_maps_to_already_registered() {
        let (repo, service) = seeded_service();

        let result = service.signup("Chess Club", "michael@mergington.edu").await;

        assert!(matches!(result, Err(AppError::AlreadyRegistered)));

        // Second call left the count unchanged
        let activity = repo.get_activity("Chess Club").await.unwrap().unwrap();
        assert_eq!(activity.participant_count(), 1);
    }

    #[tokio::test]
    async fn test_signup_when_full_maps_to_activity_full() {
        let (_repo, service) = seeded_service();

        // Chess Club has capacity 2 with 1 seat taken
        service
            .signup("Chess Club", "newkid@mergington.edu")
            .await
            .unwrap();
        let result = service.signup("Chess Club", "latecomer@mergington.edu").await;

        assert!(matches!(result, Err(AppError::ActivityFull)));
    }

    #[tokio::test]
    async fn test_unregister_formats_confirmation_message() {
        let (repo, service) = seeded_service();

        let response = service
            .unregister("Tennis Club", "liam@mergington.edu")
            .await
            .unwrap();

        assert_eq!(response.message, "Removed liam@mergington.edu from Tennis Club");

        let activity = repo.get_activity("Tennis Club").await.unwrap().unwrap();
        assert_eq!(activity.participant_count(), 1);
        assert!(!activity.has_participant("liam@mergington.edu"));
    }

    #[tokio::test]
    async fn test_unregister_absent_email_maps_to_participant_not_found() {
        let (_repo, service) = seeded_service();

        let result = service
            .unregister("Tennis Club", "ghost@mergington.edu")
            .await;

        assert!(matches!(result, Err(AppError::ParticipantNotFound)));
    }

    #[tokio::test]
    async fn test_unregister_unknown_activity_maps_to_not_found() {
        let (_repo, service) = seeded_service();

        let result = service
            .unregister("Knitting Circle", "tester@mergington.edu")
            .await;

        assert!(matches!(result, Err(AppError::ActivityNotFound)));
    }

    #[tokio::test]
    async fn test_signup_then_unregister_round_trip() {
        let (repo, service) = seeded_service();
        let before = repo.get_activity("Tennis Club").await.unwrap().unwrap();

        service
            .signup("Tennis Club", "tester@mergington.edu")
            .await
            .unwrap();
        service
            .unregister("Tennis Club", "tester@mergington.edu")
            .await
            .unwrap();

        let after = repo.get_activity("Tennis Club").await.unwrap().unwrap();
        assert_eq!(before, after);
    }
}
