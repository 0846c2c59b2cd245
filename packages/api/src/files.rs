//! Uploaded file records.
//!
//! Files are immutable once uploaded: the gateway exposes no update verb on
//! a file item, only retrieval and deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded file, as returned by `GET /files` and `GET /files/{fileID}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileResponse {
    pub id: String,

    /// Display name shown in the console.
    pub name: String,

    /// Original filename as uploaded.
    pub filename: String,

    /// Size in bytes.
    pub size: u64,

    /// Identifier of the uploading user.
    pub owner: String,

    pub created: DateTime<Utc>,
}

/// Request body for `POST /files`.
///
/// The console uploads content out of band; this request registers the
/// file's metadata and receives the identifier used to attach it to events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    pub name: String,
    pub filename: String,
    pub size: u64,
}
