//! User records.
//!
//! Users are managed by the organisation's directory, not by this console;
//! the gateway exposes them read-only and the client binds no mutating verb.

use serde::{Deserialize, Serialize};

/// A directory user, as returned by `GET /users` and `GET /users/{userID}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub username: String,

    /// Avatar URL, when the directory provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}
