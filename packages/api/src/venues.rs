//! Venue records.

use serde::{Deserialize, Serialize};

/// A stored venue, as returned by `GET /venues` and `GET /venues/{venueID}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VenueResponse {
    pub id: String,
    pub name: String,

    /// Maximum attendance, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    /// Display colour used by the console's calendar view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
}

/// Request body for `POST /venues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
}

/// Request body for `PATCH /venues/{venueID}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVenue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
}
