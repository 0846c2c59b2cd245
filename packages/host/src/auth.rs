//! The credential gate in front of the console bundle.
//!
//! Every request must carry either a bearer token (`Authorization: Bearer …`)
//! or a session cookie. Verification of the credential is delegated to a
//! pluggable [`CredentialVerifier`] strategy — this host never implements an
//! authentication protocol of its own. Requests with no credential, or one
//! the verifier rejects, receive a 401 with the standard error body.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use eventdesk_api::{error::codes, ErrorBody};

/// Name of the session cookie the console's login flow sets.
pub const SESSION_COOKIE: &str = "eventdesk_session";

/// A credential presented by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Value of an `Authorization: Bearer …` header.
    Bearer(String),
    /// Value of the [`SESSION_COOKIE`] cookie.
    Session(String),
}

/// Pluggable credential-verification strategy.
///
/// Deployments wire in the organisation's verifier; the host ships only
/// [`StaticTokenVerifier`] for development and tests.
#[async_trait::async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// `true` if the credential identifies an authorised console user.
    async fn verify(&self, credential: &Credential) -> bool;
}

/// Verifier that accepts a single fixed token, as bearer or cookie value.
pub struct StaticTokenVerifier {
    token: String,
}

impl StaticTokenVerifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for StaticTokenVerifier {
    async fn verify(&self, credential: &Credential) -> bool {
        let presented = match credential {
            Credential::Bearer(t) => t,
            Credential::Session(t) => t,
        };
        presented == &self.token
    }
}

/// Pull a credential out of the request headers.
///
/// The bearer header wins when both are present.
pub fn extract_credential(headers: &HeaderMap) -> Option<Credential> {
    if let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(Credential::Bearer(token.to_string()));
        }
    }

    let cookies = headers.get(header::COOKIE).and_then(|v| v.to_str().ok())?;
    for pair in cookies.split(';') {
        if let Some(value) = pair.trim().strip_prefix(SESSION_COOKIE) {
            if let Some(token) = value.strip_prefix('=') {
                return Some(Credential::Session(token.to_string()));
            }
        }
    }
    None
}

/// Middleware that gates every route behind the verifier.
pub async fn require_credentials(
    verifier: Arc<dyn CredentialVerifier>,
    request: Request,
    next: Next,
) -> Response {
    match extract_credential(request.headers()) {
        Some(credential) if verifier.verify(&credential).await => next.run(request).await,
        Some(_) => unauthorized("credential rejected"),
        None => unauthorized("no credential presented"),
    }
}

fn unauthorized(message: &str) -> Response {
    let body = ErrorBody::new(codes::UNAUTHORIZED, message);
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
