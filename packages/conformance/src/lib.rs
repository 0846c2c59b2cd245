//! Shared helpers for the eventdesk conformance suite.
//!
//! Provides [`spawn_gateway`] — a function that binds a `TcpListener` on an
//! ephemeral port, wires up an in-process mock gateway backed by an
//! in-memory store, and returns both the base URL and a handle to the store
//! so tests can seed data without going through the HTTP layer.
//!
//! The mock implements the gateway's transport contract for a representative
//! subset of resources: every successful body is `{ "result": … }`, mutating
//! verbs answer with an identifier-only acknowledgment, deletes answer 204
//! with no body, and unknown ids answer 404 with the standard error body.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use tokio::sync::RwLock;

use eventdesk_api::{
    error::codes, CommentResponse, CreateComment, CreateEvent, CreateVenue, Envelope, ErrorBody,
    EventResponse, ModifyAck, UpdateEvent, UserResponse, VenueResponse,
};

/// In-memory state behind the mock gateway.
#[derive(Default)]
pub struct Store {
    pub events: HashMap<String, EventResponse>,
    /// Comments keyed by the owning event id.
    pub comments: HashMap<String, Vec<CommentResponse>>,
    pub venues: HashMap<String, VenueResponse>,
    pub users: HashMap<String, UserResponse>,
    next_id: u64,
}

impl Store {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiError = (StatusCode, Json<ErrorBody>);

fn not_found(what: &str, id: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(codes::NOT_FOUND, format!("no {what} with id {id}"))),
    )
}

/// Start an ephemeral in-process mock gateway and return `(base_url, store)`.
///
/// The gateway runs in a background `tokio` task and is bound to an
/// OS-assigned port on `127.0.0.1`. The returned store handle is the same
/// instance the handlers use, so tests can seed records directly.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound.
pub async fn spawn_gateway() -> (String, Db) {
    let db: Db = Arc::new(RwLock::new(Store::default()));

    let app = Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{eventID}",
            get(get_event).patch(update_event).delete(delete_event),
        )
        .route(
            "/events/{eventID}/comments",
            get(list_comments).post(create_comment),
        )
        .route("/venues", get(list_venues).post(create_venue))
        .route("/venues/{venueID}", get(get_venue))
        .route("/venues/{venueID}/events", get(list_venue_events))
        .route("/users", get(list_users))
        .route("/users/{userID}", get(get_user))
        .with_state(Arc::clone(&db));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock gateway error");
    });

    (format!("http://{addr}"), db)
}

// --- events ----------------------------------------------------------------

async fn list_events(State(db): State<Db>) -> Json<Envelope<Vec<EventResponse>>> {
    let store = db.read().await;
    let mut events: Vec<_> = store.events.values().cloned().collect();
    events.sort_by(|a, b| a.id.cmp(&b.id));
    Json(Envelope::new(events))
}

async fn create_event(
    State(db): State<Db>,
    Json(input): Json<CreateEvent>,
) -> Json<Envelope<ModifyAck>> {
    let mut store = db.write().await;
    let id = store.next_id("ev");
    let event = EventResponse {
        id: id.clone(),
        name: input.name,
        venue: input.venue,
        start: input.start,
        end: input.end,
        state: input.state,
        ents: input.ents,
        description: input.description,
    };
    store.events.insert(id.clone(), event);
    Json(Envelope::new(ModifyAck { id }))
}

async fn get_event(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<EventResponse>>, ApiError> {
    let store = db.read().await;
    store
        .events
        .get(&id)
        .cloned()
        .map(|e| Json(Envelope::new(e)))
        .ok_or_else(|| not_found("event", &id))
}

async fn update_event(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEvent>,
) -> Result<Json<Envelope<ModifyAck>>, ApiError> {
    let mut store = db.write().await;
    let event = store.events.get_mut(&id).ok_or_else(|| not_found("event", &id))?;
    if let Some(name) = input.name {
        event.name = name;
    }
    if let Some(venue) = input.venue {
        event.venue = venue;
    }
    if let Some(start) = input.start {
        event.start = start;
    }
    if let Some(end) = input.end {
        event.end = end;
    }
    if let Some(state) = input.state {
        event.state = Some(state);
    }
    if let Some(ents) = input.ents {
        event.ents = Some(ents);
    }
    if let Some(description) = input.description {
        event.description = Some(description);
    }
    Ok(Json(Envelope::new(ModifyAck { id })))
}

async fn delete_event(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    store
        .events
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| not_found("event", &id))
}

// --- comments --------------------------------------------------------------

async fn list_comments(
    State(db): State<Db>,
    Path(event_id): Path<String>,
) -> Result<Json<Envelope<Vec<CommentResponse>>>, ApiError> {
    let store = db.read().await;
    if !store.events.contains_key(&event_id) {
        return Err(not_found("event", &event_id));
    }
    let comments = store.comments.get(&event_id).cloned().unwrap_or_default();
    Ok(Json(Envelope::new(comments)))
}

async fn create_comment(
    State(db): State<Db>,
    Path(event_id): Path<String>,
    Json(input): Json<CreateComment>,
) -> Result<Json<Envelope<ModifyAck>>, ApiError> {
    let mut store = db.write().await;
    if !store.events.contains_key(&event_id) {
        return Err(not_found("event", &event_id));
    }
    let id = store.next_id("c");
    let comment = CommentResponse {
        id: id.clone(),
        poster: "u1".into(),
        body: input.body,
        posted: Utc::now(),
        topic: input.topic,
    };
    store.comments.entry(event_id).or_default().push(comment);
    Ok(Json(Envelope::new(ModifyAck { id })))
}

// --- venues ----------------------------------------------------------------

async fn list_venues(State(db): State<Db>) -> Json<Envelope<Vec<VenueResponse>>> {
    let store = db.read().await;
    let mut venues: Vec<_> = store.venues.values().cloned().collect();
    venues.sort_by(|a, b| a.id.cmp(&b.id));
    Json(Envelope::new(venues))
}

async fn create_venue(
    State(db): State<Db>,
    Json(input): Json<CreateVenue>,
) -> Json<Envelope<ModifyAck>> {
    let mut store = db.write().await;
    let id = store.next_id("v");
    let venue = VenueResponse {
        id: id.clone(),
        name: input.name,
        capacity: input.capacity,
        colour: input.colour,
    };
    store.venues.insert(id.clone(), venue);
    Json(Envelope::new(ModifyAck { id }))
}

async fn get_venue(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<VenueResponse>>, ApiError> {
    let store = db.read().await;
    store
        .venues
        .get(&id)
        .cloned()
        .map(|v| Json(Envelope::new(v)))
        .ok_or_else(|| not_found("venue", &id))
}

async fn list_venue_events(
    State(db): State<Db>,
    Path(venue_id): Path<String>,
) -> Result<Json<Envelope<Vec<EventResponse>>>, ApiError> {
    let store = db.read().await;
    if !store.venues.contains_key(&venue_id) {
        return Err(not_found("venue", &venue_id));
    }
    let mut events: Vec<_> = store
        .events
        .values()
        .filter(|e| e.venue == venue_id)
        .cloned()
        .collect();
    events.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(Json(Envelope::new(events)))
}

// --- users -----------------------------------------------------------------

async fn list_users(State(db): State<Db>) -> Json<Envelope<Vec<UserResponse>>> {
    let store = db.read().await;
    let mut users: Vec<_> = store.users.values().cloned().collect();
    users.sort_by(|a, b| a.id.cmp(&b.id));
    Json(Envelope::new(users))
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<UserResponse>>, ApiError> {
    let store = db.read().await;
    store
        .users
        .get(&id)
        .cloned()
        .map(|u| Json(Envelope::new(u)))
        .ok_or_else(|| not_found("user", &id))
}
