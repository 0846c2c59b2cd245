//! Error type returned by every gateway call.

use crate::uri::UriError;

/// Errors surfaced by [`crate::Gateway`] executors.
///
/// Transport failures, non-2xx statuses, and undecodable bodies all arrive
/// as [`GatewayError::Http`], carrying the underlying `reqwest` error
/// unchanged — there is no retry, fallback, or status-specific handling in
/// this layer. [`GatewayError::Uri`] is raised before any request is issued.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A URI template could not be fully expanded.
    #[error("URI error: {0}")]
    Uri(#[from] UriError),

    /// The HTTP exchange failed: connection error, non-2xx status, or a
    /// response body that did not match the envelope contract.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
