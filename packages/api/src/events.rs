//! Event records and their nested comment, signup, and attachment types.
//!
//! Events are the central resource of the console. A stored event references
//! its venue, run state, and ents state by identifier; the gateway resolves
//! those references server-side, so list responses carry plain id strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored event, as returned by `GET /events` and `GET /events/{eventID}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventResponse {
    pub id: String,
    pub name: String,

    /// Identifier of the venue the event runs in.
    pub venue: String,

    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,

    /// Identifier of the event's run state (e.g. provisional, confirmed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Identifier of the event's ents state (technical provisioning status).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ents: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for `POST /events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub venue: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ents: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for `PATCH /events/{eventID}`.
///
/// Only the fields present in the JSON are applied; omitted fields remain
/// unchanged on the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ents: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A comment left on an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentResponse {
    pub id: String,

    /// Identifier of the user who posted the comment.
    pub poster: String,

    pub body: String,
    pub posted: DateTime<Utc>,

    /// Topic the comment is filed under, when categorised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// Request body for `POST /events/{eventID}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// Request body for `PATCH /events/{eventID}/comments/{commentID}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// A crew signup against an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupResponse {
    pub id: String,

    /// Identifier of the signed-up user.
    pub user: String,

    /// Role the user signed up for (e.g. "sound", "lighting").
    pub role: String,

    pub created: DateTime<Utc>,
}

/// Request body for `POST /events/{eventID}/signups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSignup {
    pub user: String,
    pub role: String,
}

/// Request body for `PATCH /events/{eventID}/signups/{signupID}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSignup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Request body for `POST /events/{eventID}/files` — links an already
/// uploaded file (see `POST /files`) to an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachFile {
    /// Identifier of the uploaded file to attach.
    pub file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_event_omits_absent_fields() {
        let patch = UpdateEvent {
            name: Some("Freshers Ball".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"name":"Freshers Ball"}"#);
    }

    #[test]
    fn event_roundtrip() {
        let ev = EventResponse {
            id: "ev41".into(),
            name: "Summer Ball".into(),
            venue: "v9".into(),
            start: "2026-06-12T19:00:00Z".parse().unwrap(),
            end: "2026-06-13T02:00:00Z".parse().unwrap(),
            state: Some("confirmed".into()),
            ents: None,
            description: None,
        };
        let json = serde_json::to_string(&ev).unwrap();
        let back: EventResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ev);
    }
}
