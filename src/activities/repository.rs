use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use tracing::{debug, info, instrument};

use super::models::Activity;
use crate::shared::AppError;

/// Result of attempting to sign a student up for an activity
#[derive(Debug, Clone)]
pub enum SignupResult {
    /// Email was added to the roster, returns the updated activity
    Success(Activity),
    /// Activity name is not a key in the roster
    ActivityNotFound,
    /// Email is already on this activity's roster
    AlreadyRegistered,
    /// Roster has reached max_participants
    ActivityFull,
}

/// Result of attempting to remove a participant from an activity
#[derive(Debug, Clone)]
pub enum UnregisterResult {
    /// Email was removed from the roster, returns the updated activity
    Success(Activity),
    /// Activity name is not a key in the roster
    ActivityNotFound,
    /// Email is not on this activity's roster
    ParticipantNotFound,
}

/// Trait for roster store operations
#[async_trait]
pub trait RosterRepository {
    /// Returns the full current state, keyed by activity name
    async fn list_activities(&self) -> Result<BTreeMap<String, Activity>, AppError>;

    /// Looks up a single activity by name
    async fn get_activity(&self, activity_name: &str) -> Result<Option<Activity>, AppError>;

    /// Atomically signs an email up, checking existence, duplicates, and
    /// capacity under one lock so concurrent signups cannot lose updates
    async fn signup(&self, activity_name: &str, email: &str) -> Result<SignupResult, AppError>;

    /// Atomically removes an email from an activity's roster
    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<UnregisterResult, AppError>;
}

/// In-memory implementation of RosterRepository
///
/// The whole roster lives behind a single mutex; every operation does its
/// checks and writes under one acquisition, so signup and unregister are
/// atomic with respect to each other. State is lost when the process exits.
pub struct InMemoryRosterRepository {
    activities: Mutex<BTreeMap<String, Activity>>,
}

impl Default for InMemoryRosterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRosterRepository {
    /// Creates a new empty roster
    pub fn new() -> Self {
        Self {
            activities: Mutex::new(BTreeMap::new()),
        }
    }

    /// Creates a roster pre-populated with the given activities
    pub fn with_activities(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        Self {
            activities: Mutex::new(activities.into_iter().collect()),
        }
    }

    /// Returns the current number of activities in the roster
    pub fn activity_count(&self) -> usize {
        self.activities.lock().unwrap().len()
    }

    /// Checks if an activity exists by name (useful for debugging)
    pub fn has_activity(&self, activity_name: &str) -> bool {
        self.activities.lock().unwrap().contains_key(activity_name)
    }
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    #[instrument(skip(self))]
    async fn list_activities(&self) -> Result<BTreeMap<String, Activity>, AppError> {
        debug!("Listing all activities in the roster");

        let activities = self.activities.lock().unwrap();
        Ok(activities.clone())
    }

    #[instrument(skip(self))]
    async fn get_activity(&self, activity_name: &str) -> Result<Option<Activity>, AppError> {
        debug!(activity = %activity_name, "Fetching activity from the roster");

        let activities = self.activities.lock().unwrap();
        let activity = activities.get(activity_name).cloned();

        match &activity {
            Some(a) => {
                debug!(
                    activity = %activity_name,
                    participant_count = a.participant_count(),
                    "Activity found in roster"
                )
            }
            None => debug!(activity = %activity_name, "Activity not found in roster"),
        }

        Ok(activity)
    }

    #[instrument(skip(self))]
    async fn signup(&self, activity_name: &str, email: &str) -> Result<SignupResult, AppError> {
        debug!(activity = %activity_name, email = %email, "Attempting signup atomically");

        let mut activities = self.activities.lock().unwrap();

        // Get the activity or report ActivityNotFound
        let activity = match activities.get_mut(activity_name) {
            Some(activity) => activity,
            None => {
                debug!(activity = %activity_name, "Activity not found");
                return Ok(SignupResult::ActivityNotFound);
            }
        };

        // Reject duplicate registrations before anything else
        if activity.has_participant(email) {
            debug!(activity = %activity_name, email = %email, "Email already registered");
            return Ok(SignupResult::AlreadyRegistered);
        }

        // Enforce the capacity ceiling
        if activity.is_full() {
            debug!(
                activity = %activity_name,
                max_participants = activity.max_participants,
                "Activity is at capacity"
            );
            return Ok(SignupResult::ActivityFull);
        }

        activity.add_participant(email.to_string());

        // Clone the updated activity to return
        let updated_activity = activity.clone();

        info!(
            activity = %activity_name,
            email = %email,
            participant_count = updated_activity.participant_count(),
            "Participant signed up successfully (atomic)"
        );

        Ok(SignupResult::Success(updated_activity))
    }

    #[instrument(skip(self))]
    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<UnregisterResult, AppError> {
        debug!(activity = %activity_name, email = %email, "Attempting unregister atomically");

        let mut activities = self.activities.lock().unwrap();

        // Get the activity or report ActivityNotFound
        let activity = match activities.get_mut(activity_name) {
            Some(activity) => activity,
            None => {
                debug!(activity = %activity_name, "Activity not found");
                return Ok(UnregisterResult::ActivityNotFound);
            }
        };

        // Check the email is actually registered
        if !activity.has_participant(email) {
            debug!(activity = %activity_name, email = %email, "Email not registered");
            return Ok(UnregisterResult::ParticipantNotFound);
        }

        activity.remove_participant(email);

        // Clone the updated activity to return
        let updated_activity = activity.clone();

        info!(
            activity = %activity_name,
            email = %email,
            participant_count = updated_activity.participant_count(),
            "Participant removed successfully (atomic)"
        );

        Ok(UnregisterResult::Success(updated_activity))
    }
}
