//! Request and response types for the eventdesk gateway API.
//!
//! This crate encodes the gateway's HTTP contract as Rust types. Every
//! successful response body is wrapped in an [`Envelope`] (`{ "result": … }`);
//! every error body is an [`ErrorBody`]. The client crate unwraps the
//! envelope, so callers only ever see the `result` payload.
//!
//! # Endpoints covered
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | GET | `/events` | → `Vec<`[`EventResponse`]`>` |
//! | POST | `/events` | [`CreateEvent`] → [`ModifyAck`] |
//! | GET | `/events/{eventID}` | → [`EventResponse`] |
//! | PATCH | `/events/{eventID}` | [`UpdateEvent`] → [`ModifyAck`] |
//! | DELETE | `/events/{eventID}` | → `204` |
//! | GET/POST | `/events/{eventID}/comments` | [`CreateComment`] → [`ModifyAck`] |
//! | GET/PATCH/DELETE | `/events/{eventID}/comments/{commentID}` | [`CommentResponse`] |
//! | GET/POST | `/events/{eventID}/signups` | [`CreateSignup`] → [`ModifyAck`] |
//! | GET/PATCH/DELETE | `/events/{eventID}/signups/{signupID}` | [`SignupResponse`] |
//! | GET/POST | `/events/{eventID}/files` | [`AttachFile`] → [`ModifyAck`] |
//! | GET/POST | `/venues` | [`CreateVenue`] → [`ModifyAck`] |
//! | GET/PATCH/DELETE | `/venues/{venueID}` | [`VenueResponse`] |
//! | GET | `/venues/{venueID}/events` | → `Vec<`[`EventResponse`]`>` |
//! | GET/POST | `/ents` | [`CreateEntState`] → [`ModifyAck`] |
//! | GET/PATCH/DELETE | `/ents/{entID}` | [`EntStateResponse`] |
//! | GET/POST | `/states` | [`CreateState`] → [`ModifyAck`] |
//! | GET/PATCH/DELETE | `/states/{stateID}` | [`StateResponse`] |
//! | GET/POST | `/topics` | [`CreateTopic`] → [`ModifyAck`] |
//! | GET/PATCH/DELETE | `/topics/{topicID}` | [`TopicResponse`] |
//! | GET/POST | `/files` | [`CreateFile`] → [`ModifyAck`] |
//! | GET/DELETE | `/files/{fileID}` | [`FileResponse`] |
//! | GET | `/users` | → `Vec<`[`UserResponse`]`>` |
//! | GET | `/users/{userID}` | → [`UserResponse`] |

pub mod envelope;
pub mod error;
pub mod events;
pub mod files;
pub mod metadata;
pub mod users;
pub mod venues;

pub use envelope::{Envelope, ModifyAck};
pub use error::ErrorBody;
pub use events::{
    AttachFile, CommentResponse, CreateComment, CreateEvent, CreateSignup, EventResponse,
    SignupResponse, UpdateComment, UpdateEvent, UpdateSignup,
};
pub use files::{CreateFile, FileResponse};
pub use metadata::{
    CreateEntState, CreateState, CreateTopic, EntStateResponse, StateResponse, TopicResponse,
    UpdateEntState, UpdateState, UpdateTopic,
};
pub use users::UserResponse;
pub use venues::{CreateVenue, UpdateVenue, VenueResponse};
