//! The declarative endpoint registry — every gateway operation, bound once.
//!
//! Each constant pairs a URI template with the shapes of its parameters,
//! body, and result. Operations the gateway does not support (updating a
//! file, mutating a user) simply have no descriptor, so invoking them is a
//! compile error rather than a runtime failure. [`ENDPOINTS`] lists the
//! type-erased metadata of every binding for introspection.

use eventdesk_api::{
    AttachFile, CommentResponse, CreateComment, CreateEntState, CreateEvent, CreateFile,
    CreateSignup, CreateState, CreateTopic, CreateVenue, EntStateResponse, EventResponse,
    FileResponse, ModifyAck, SignupResponse, StateResponse, TopicResponse, UpdateComment,
    UpdateEntState, UpdateEvent, UpdateSignup, UpdateState, UpdateTopic, UpdateVenue,
    UserResponse, VenueResponse,
};

use crate::endpoint::{Endpoint, EndpointMeta, Method, NoBody, NoContent};
use crate::params::{
    CommentPath, EntPath, EventPath, FilePath, SignupPath, StatePath, TopicPath, UserPath,
    VenuePath,
};
use crate::uri::NoParams;

// --- events ----------------------------------------------------------------

pub const EVENTS_LIST: Endpoint<NoParams, NoBody, Vec<EventResponse>> =
    Endpoint::new(Method::Get, "/events", "List every event");

pub const EVENTS_CREATE: Endpoint<NoParams, CreateEvent, ModifyAck> =
    Endpoint::new(Method::Post, "/events", "Create a new event");

pub const EVENT_GET: Endpoint<EventPath, NoBody, EventResponse> =
    Endpoint::new(Method::Get, "/events/{eventID}", "Fetch one event by id");

pub const EVENT_UPDATE: Endpoint<EventPath, UpdateEvent, ModifyAck> =
    Endpoint::new(Method::Patch, "/events/{eventID}", "Update fields of an event");

pub const EVENT_DELETE: Endpoint<EventPath, NoBody, NoContent> =
    Endpoint::new(Method::Delete, "/events/{eventID}", "Delete an event");

pub const EVENT_COMMENTS_LIST: Endpoint<EventPath, NoBody, Vec<CommentResponse>> = Endpoint::new(
    Method::Get,
    "/events/{eventID}/comments",
    "List the comments on an event",
);

pub const EVENT_COMMENTS_CREATE: Endpoint<EventPath, CreateComment, ModifyAck> = Endpoint::new(
    Method::Post,
    "/events/{eventID}/comments",
    "Post a comment on an event",
);

pub const EVENT_COMMENT_GET: Endpoint<CommentPath, NoBody, CommentResponse> = Endpoint::new(
    Method::Get,
    "/events/{eventID}/comments/{commentID}",
    "Fetch one comment on an event",
);

pub const EVENT_COMMENT_UPDATE: Endpoint<CommentPath, UpdateComment, ModifyAck> = Endpoint::new(
    Method::Patch,
    "/events/{eventID}/comments/{commentID}",
    "Edit a comment on an event",
);

pub const EVENT_COMMENT_DELETE: Endpoint<CommentPath, NoBody, NoContent> = Endpoint::new(
    Method::Delete,
    "/events/{eventID}/comments/{commentID}",
    "Delete a comment from an event",
);

pub const EVENT_FILES_LIST: Endpoint<EventPath, NoBody, Vec<FileResponse>> = Endpoint::new(
    Method::Get,
    "/events/{eventID}/files",
    "List the files attached to an event",
);

pub const EVENT_FILES_ATTACH: Endpoint<EventPath, AttachFile, ModifyAck> = Endpoint::new(
    Method::Post,
    "/events/{eventID}/files",
    "Attach an uploaded file to an event",
);

pub const EVENT_SIGNUPS_LIST: Endpoint<EventPath, NoBody, Vec<SignupResponse>> = Endpoint::new(
    Method::Get,
    "/events/{eventID}/signups",
    "List the crew signups for an event",
);

pub const EVENT_SIGNUPS_CREATE: Endpoint<EventPath, CreateSignup, ModifyAck> = Endpoint::new(
    Method::Post,
    "/events/{eventID}/signups",
    "Sign a user up to crew an event",
);

pub const EVENT_SIGNUP_GET: Endpoint<SignupPath, NoBody, SignupResponse> = Endpoint::new(
    Method::Get,
    "/events/{eventID}/signups/{signupID}",
    "Fetch one signup on an event",
);

pub const EVENT_SIGNUP_UPDATE: Endpoint<SignupPath, UpdateSignup, ModifyAck> = Endpoint::new(
    Method::Patch,
    "/events/{eventID}/signups/{signupID}",
    "Change the role of a signup",
);

pub const EVENT_SIGNUP_DELETE: Endpoint<SignupPath, NoBody, NoContent> = Endpoint::new(
    Method::Delete,
    "/events/{eventID}/signups/{signupID}",
    "Withdraw a signup from an event",
);

// --- venues ----------------------------------------------------------------

pub const VENUES_LIST: Endpoint<NoParams, NoBody, Vec<VenueResponse>> =
    Endpoint::new(Method::Get, "/venues", "List every venue");

pub const VENUES_CREATE: Endpoint<NoParams, CreateVenue, ModifyAck> =
    Endpoint::new(Method::Post, "/venues", "Create a new venue");

pub const VENUE_GET: Endpoint<VenuePath, NoBody, VenueResponse> =
    Endpoint::new(Method::Get, "/venues/{venueID}", "Fetch one venue by id");

pub const VENUE_UPDATE: Endpoint<VenuePath, UpdateVenue, ModifyAck> =
    Endpoint::new(Method::Patch, "/venues/{venueID}", "Update fields of a venue");

pub const VENUE_DELETE: Endpoint<VenuePath, NoBody, NoContent> =
    Endpoint::new(Method::Delete, "/venues/{venueID}", "Delete a venue");

pub const VENUE_EVENTS_LIST: Endpoint<VenuePath, NoBody, Vec<EventResponse>> = Endpoint::new(
    Method::Get,
    "/venues/{venueID}/events",
    "List the events held at a venue",
);

// --- ents states -----------------------------------------------------------

pub const ENTS_LIST: Endpoint<NoParams, NoBody, Vec<EntStateResponse>> =
    Endpoint::new(Method::Get, "/ents", "List every ents state");

pub const ENTS_CREATE: Endpoint<NoParams, CreateEntState, ModifyAck> =
    Endpoint::new(Method::Post, "/ents", "Create a new ents state");

pub const ENT_GET: Endpoint<EntPath, NoBody, EntStateResponse> =
    Endpoint::new(Method::Get, "/ents/{entID}", "Fetch one ents state by id");

pub const ENT_UPDATE: Endpoint<EntPath, UpdateEntState, ModifyAck> =
    Endpoint::new(Method::Patch, "/ents/{entID}", "Update fields of an ents state");

pub const ENT_DELETE: Endpoint<EntPath, NoBody, NoContent> =
    Endpoint::new(Method::Delete, "/ents/{entID}", "Delete an ents state");

// --- run states ------------------------------------------------------------

pub const STATES_LIST: Endpoint<NoParams, NoBody, Vec<StateResponse>> =
    Endpoint::new(Method::Get, "/states", "List every run state");

pub const STATES_CREATE: Endpoint<NoParams, CreateState, ModifyAck> =
    Endpoint::new(Method::Post, "/states", "Create a new run state");

pub const STATE_GET: Endpoint<StatePath, NoBody, StateResponse> =
    Endpoint::new(Method::Get, "/states/{stateID}", "Fetch one run state by id");

pub const STATE_UPDATE: Endpoint<StatePath, UpdateState, ModifyAck> =
    Endpoint::new(Method::Patch, "/states/{stateID}", "Update fields of a run state");

pub const STATE_DELETE: Endpoint<StatePath, NoBody, NoContent> =
    Endpoint::new(Method::Delete, "/states/{stateID}", "Delete a run state");

// --- topics ----------------------------------------------------------------

pub const TOPICS_LIST: Endpoint<NoParams, NoBody, Vec<TopicResponse>> =
    Endpoint::new(Method::Get, "/topics", "List every comment topic");

pub const TOPICS_CREATE: Endpoint<NoParams, CreateTopic, ModifyAck> =
    Endpoint::new(Method::Post, "/topics", "Create a new comment topic");

pub const TOPIC_GET: Endpoint<TopicPath, NoBody, TopicResponse> =
    Endpoint::new(Method::Get, "/topics/{topicID}", "Fetch one comment topic by id");

pub const TOPIC_UPDATE: Endpoint<TopicPath, UpdateTopic, ModifyAck> =
    Endpoint::new(Method::Patch, "/topics/{topicID}", "Update fields of a comment topic");

pub const TOPIC_DELETE: Endpoint<TopicPath, NoBody, NoContent> =
    Endpoint::new(Method::Delete, "/topics/{topicID}", "Delete a comment topic");

// --- files -----------------------------------------------------------------

pub const FILES_LIST: Endpoint<NoParams, NoBody, Vec<FileResponse>> =
    Endpoint::new(Method::Get, "/files", "List every uploaded file");

pub const FILES_CREATE: Endpoint<NoParams, CreateFile, ModifyAck> =
    Endpoint::new(Method::Post, "/files", "Register a newly uploaded file");

pub const FILE_GET: Endpoint<FilePath, NoBody, FileResponse> =
    Endpoint::new(Method::Get, "/files/{fileID}", "Fetch one file by id");

pub const FILE_DELETE: Endpoint<FilePath, NoBody, NoContent> =
    Endpoint::new(Method::Delete, "/files/{fileID}", "Delete an uploaded file");

// --- users (read-only) -----------------------------------------------------

pub const USERS_LIST: Endpoint<NoParams, NoBody, Vec<UserResponse>> =
    Endpoint::new(Method::Get, "/users", "List every directory user");

pub const USER_GET: Endpoint<UserPath, NoBody, UserResponse> =
    Endpoint::new(Method::Get, "/users/{userID}", "Fetch one directory user by id");

/// Type-erased metadata for every bound endpoint.
pub static ENDPOINTS: &[EndpointMeta] = &[
    EVENTS_LIST.meta(),
    EVENTS_CREATE.meta(),
    EVENT_GET.meta(),
    EVENT_UPDATE.meta(),
    EVENT_DELETE.meta(),
    EVENT_COMMENTS_LIST.meta(),
    EVENT_COMMENTS_CREATE.meta(),
    EVENT_COMMENT_GET.meta(),
    EVENT_COMMENT_UPDATE.meta(),
    EVENT_COMMENT_DELETE.meta(),
    EVENT_FILES_LIST.meta(),
    EVENT_FILES_ATTACH.meta(),
    EVENT_SIGNUPS_LIST.meta(),
    EVENT_SIGNUPS_CREATE.meta(),
    EVENT_SIGNUP_GET.meta(),
    EVENT_SIGNUP_UPDATE.meta(),
    EVENT_SIGNUP_DELETE.meta(),
    VENUES_LIST.meta(),
    VENUES_CREATE.meta(),
    VENUE_GET.meta(),
    VENUE_UPDATE.meta(),
    VENUE_DELETE.meta(),
    VENUE_EVENTS_LIST.meta(),
    ENTS_LIST.meta(),
    ENTS_CREATE.meta(),
    ENT_GET.meta(),
    ENT_UPDATE.meta(),
    ENT_DELETE.meta(),
    STATES_LIST.meta(),
    STATES_CREATE.meta(),
    STATE_GET.meta(),
    STATE_UPDATE.meta(),
    STATE_DELETE.meta(),
    TOPICS_LIST.meta(),
    TOPICS_CREATE.meta(),
    TOPIC_GET.meta(),
    TOPIC_UPDATE.meta(),
    TOPIC_DELETE.meta(),
    FILES_LIST.meta(),
    FILES_CREATE.meta(),
    FILE_GET.meta(),
    FILE_DELETE.meta(),
    USERS_LIST.meta(),
    USER_GET.meta(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_binding_has_a_description() {
        for meta in ENDPOINTS {
            assert!(
                !meta.description.is_empty(),
                "{} {} has no description",
                meta.method.as_str(),
                meta.uri
            );
        }
    }

    #[test]
    fn templates_are_rooted_and_balanced() {
        for meta in ENDPOINTS {
            assert!(meta.uri.starts_with('/'), "{} is not rooted", meta.uri);
            let opens = meta.uri.matches('{').count();
            let closes = meta.uri.matches('}').count();
            assert_eq!(opens, closes, "unbalanced braces in {}", meta.uri);
        }
    }

    #[test]
    fn users_have_no_mutating_verbs() {
        for meta in ENDPOINTS {
            if meta.uri.starts_with("/users") {
                assert_eq!(meta.method, Method::Get);
            }
        }
    }

    #[test]
    fn files_have_no_update_verb() {
        for meta in ENDPOINTS {
            if meta.uri == "/files/{fileID}" {
                assert_ne!(meta.method, Method::Patch);
            }
        }
    }
}
