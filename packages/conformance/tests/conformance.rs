//! End-to-end tests for the eventdesk gateway bindings.
//!
//! Each test spawns an ephemeral in-process mock gateway (real TCP, real
//! HTTP) via [`eventdesk_conformance::spawn_gateway`] and drives it through
//! the typed client, so the whole path — surface tree, endpoint binding,
//! URI formatting, envelope unwrapping — is exercised on the wire.
//!
//! # Coverage
//!
//! | Test | Contract |
//! |------|----------|
//! | `list_events_starts_empty` | list endpoints return arrays |
//! | `create_event_returns_identifier_ack` | mutating verbs ack with an id |
//! | `created_event_is_readable_by_id` | create-then-read sequencing |
//! | `patch_applies_only_the_supplied_fields` | PATCH partial-update semantics |
//! | `delete_resolves_with_no_value_and_removes_the_event` | deletes carry no payload |
//! | `path_params_are_percent_encoded_on_the_wire` | reserved characters in ids |
//! | `events_by_venue_lists_only_that_venue` | nested events-by-venue listing |
//! | `unknown_event_id_surfaces_as_an_error` | non-2xx failures reach the caller |
//! | `comments_nest_under_their_event` | nested collection operations |
//! | `users_are_readable` | read-only users resource |

use chrono::{TimeZone, Utc};
use eventdesk_api::{CreateComment, CreateEvent, CreateVenue, EventResponse, UpdateEvent, UserResponse};
use eventdesk_client::{Gateway, GatewayError};
use eventdesk_conformance::spawn_gateway;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn create_event_body(name: &str, venue: &str) -> CreateEvent {
    CreateEvent {
        name: name.into(),
        venue: venue.into(),
        start: Utc.with_ymd_and_hms(2026, 6, 12, 19, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2026, 6, 13, 2, 0, 0).unwrap(),
        state: None,
        ents: None,
        description: None,
    }
}

fn seeded_event(id: &str, venue: &str) -> EventResponse {
    EventResponse {
        id: id.into(),
        name: "Seeded".into(),
        venue: venue.into(),
        start: Utc.with_ymd_and_hms(2026, 6, 12, 19, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2026, 6, 13, 2, 0, 0).unwrap(),
        state: None,
        ents: None,
        description: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_events_starts_empty() {
    let (base, _db) = spawn_gateway().await;
    let gw = Gateway::new(base);

    let events = gw.events().list().await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn create_event_returns_identifier_ack() {
    let (base, _db) = spawn_gateway().await;
    let gw = Gateway::new(base);

    let ack = gw
        .events()
        .create(&create_event_body("Summer Ball", "v9"))
        .await
        .unwrap();
    assert_eq!(ack.id, "ev1");
}

#[tokio::test]
async fn created_event_is_readable_by_id() {
    let (base, _db) = spawn_gateway().await;
    let gw = Gateway::new(base);

    let ack = gw
        .events()
        .create(&create_event_body("Summer Ball", "v9"))
        .await
        .unwrap();

    let event = gw.events().by_id(&ack.id).get().await.unwrap();
    assert_eq!(event.name, "Summer Ball");
    assert_eq!(event.venue, "v9");
}

#[tokio::test]
async fn patch_applies_only_the_supplied_fields() {
    let (base, _db) = spawn_gateway().await;
    let gw = Gateway::new(base);

    let ack = gw
        .events()
        .create(&create_event_body("Summer Ball", "v9"))
        .await
        .unwrap();

    let patch = UpdateEvent {
        name: Some("Freshers Ball".into()),
        ..Default::default()
    };
    gw.events().by_id(&ack.id).update(&patch).await.unwrap();

    let event = gw.events().by_id(&ack.id).get().await.unwrap();
    assert_eq!(event.name, "Freshers Ball");
    assert_eq!(event.venue, "v9", "untouched field must survive the patch");
}

#[tokio::test]
async fn delete_resolves_with_no_value_and_removes_the_event() {
    let (base, _db) = spawn_gateway().await;
    let gw = Gateway::new(base);

    let ack = gw
        .events()
        .create(&create_event_body("Summer Ball", "v9"))
        .await
        .unwrap();

    gw.events().by_id(&ack.id).delete().await.unwrap();

    let err = gw.events().by_id(&ack.id).get().await.unwrap_err();
    assert!(matches!(err, GatewayError::Http(_)));
}

#[tokio::test]
async fn path_params_are_percent_encoded_on_the_wire() {
    let (base, db) = spawn_gateway().await;
    let gw = Gateway::new(base);

    // An id with a space only matches if the client encodes it and the
    // server decodes it back to the stored key.
    db.write()
        .await
        .events
        .insert("summer ball".into(), seeded_event("summer ball", "v9"));

    let event = gw.events().by_id("summer ball").get().await.unwrap();
    assert_eq!(event.id, "summer ball");
}

#[tokio::test]
async fn events_by_venue_lists_only_that_venue() {
    let (base, db) = spawn_gateway().await;
    let gw = Gateway::new(base);

    let ack = gw
        .venues()
        .create(&CreateVenue {
            name: "Great Hall".into(),
            capacity: Some(800),
            colour: None,
        })
        .await
        .unwrap();

    let venue = gw.venues().by_id(&ack.id).get().await.unwrap();
    assert_eq!(venue.name, "Great Hall");

    {
        let mut store = db.write().await;
        store
            .events
            .insert("e1".into(), seeded_event("e1", &ack.id));
        store.events.insert("e2".into(), seeded_event("e2", "other"));
    }

    let events = gw.venues().by_id(&ack.id).events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "e1");
}

#[tokio::test]
async fn unknown_event_id_surfaces_as_an_error() {
    let (base, _db) = spawn_gateway().await;
    let gw = Gateway::new(base);

    let err = gw.events().by_id("missing").get().await.unwrap_err();
    assert!(matches!(err, GatewayError::Http(_)));
}

#[tokio::test]
async fn comments_nest_under_their_event() {
    let (base, _db) = spawn_gateway().await;
    let gw = Gateway::new(base);

    let ack = gw
        .events()
        .create(&create_event_body("Summer Ball", "v9"))
        .await
        .unwrap();

    let event = gw.events().by_id(&ack.id);
    event
        .comments()
        .create(&CreateComment {
            body: "PA system booked".into(),
            topic: None,
        })
        .await
        .unwrap();

    let comments = event.comments().list().await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].body, "PA system booked");
}

#[tokio::test]
async fn users_are_readable() {
    let (base, db) = spawn_gateway().await;
    let gw = Gateway::new(base);

    db.write().await.users.insert(
        "u1".into(),
        UserResponse {
            id: "u1".into(),
            name: "Avery".into(),
            username: "avery".into(),
            profile: None,
        },
    );

    let users = gw.users().list().await.unwrap();
    assert_eq!(users.len(), 1);

    let user = gw.users().by_id("u1").get().await.unwrap();
    assert_eq!(user.username, "avery");
}
