use serde::{Deserialize, Serialize};

/// A single extracurricular offering and its current roster
///
/// The activity name is not part of the model; it is the key under which the
/// activity is stored in the roster mapping, unique and immutable after
/// seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,          // Human-readable, never parsed
    pub max_participants: u32,     // Capacity ceiling for the roster
    pub participants: Vec<String>, // Registered emails in signup order
}

impl Activity {
    /// Creates an activity with an empty roster
    pub fn new(description: String, schedule: String, max_participants: u32) -> Self {
        Self {
            description,
            schedule,
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Get the current number of registered participants
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Check if the roster has reached max_participants
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Check if an email is already on the roster
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Add an email to the roster, keeping the list duplicate-free
    pub fn add_participant(&mut self, email: String) {
        if !self.has_participant(&email) {
            self.participants.push(email);
        }
    }

    /// Remove an email from the roster
    pub fn remove_participant(&mut self, email: &str) {
        self.participants.retain(|p| p != email);
    }
}
