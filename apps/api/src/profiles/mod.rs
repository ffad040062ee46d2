// Profile storage: the communication profile every generation request is drafted against.

pub mod handlers;
pub mod models;
pub mod store;

/// Returned whenever a request names a user id with no stored profile.
pub const PROFILE_NOT_FOUND: &str = "User profile not found. Please set it first.";
