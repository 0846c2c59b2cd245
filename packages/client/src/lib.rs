//! Typed REST bindings for the eventdesk gateway.
//!
//! # Overview
//!
//! The crate is built from four small pieces:
//!
//! - [`uri`] — expands `{name}` placeholders in a URI template with
//!   percent-encoded values and joins the result onto the gateway base
//!   address. Unresolved placeholders fail before a request is issued.
//! - [`Gateway`] — the four request executors: GET and DELETE (dataless),
//!   POST and PATCH (JSON body). Every successful response body is a
//!   `{ "result": … }` envelope; callers receive only the payload.
//! - [`endpoint::Endpoint`] — binds an executor signature to a URI template
//!   and a human-readable description, so the surface is self-documenting.
//! - [`surface`] — resource clients mirroring the backend's REST hierarchy:
//!   `gw.events().by_id("e1").comments().list()`.
//!
//! # Example
//!
//! ```no_run
//! # async fn demo() -> Result<(), eventdesk_client::GatewayError> {
//! use eventdesk_client::Gateway;
//!
//! let gw = Gateway::new("https://gateway.example.com/api");
//! let events = gw.events().list().await?;
//! let venue = gw.venues().by_id("v9").get().await?;
//! # let _ = (events, venue);
//! # Ok(())
//! # }
//! ```
//!
//! Calls are independent futures with no shared mutable state; the client
//! performs no retries and surfaces every failure to the caller unchanged.

pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod params;
pub mod surface;
pub mod uri;

pub use endpoint::{Endpoint, EndpointMeta, Method, NoBody, NoContent};
pub use endpoints::ENDPOINTS;
pub use error::GatewayError;
pub use gateway::Gateway;
pub use uri::{NoParams, PathParams, UriError};
