// Public API - what other modules can use
pub use handlers::{list_activities, signup_for_activity, unregister_participant};

// Internal modules
pub mod catalog;
mod handlers;
pub mod models;
pub mod repository;
mod service;
pub mod types;
