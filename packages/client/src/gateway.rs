//! The gateway client and its four request executors.
//!
//! # Design
//!
//! [`Gateway`] holds a cloneable [`reqwest::Client`] (which internally pools
//! connections) and the resolved base address of the backend gateway. It is
//! immutable after construction, so concurrent calls need no coordination;
//! each executor expands the endpoint's URI template, performs one HTTP
//! exchange, and unwraps the `{ "result": … }` envelope.
//!
//! Failures propagate verbatim from the HTTP client — no retries, no
//! status-code-specific handling. Credentials are attached by the transport
//! (same-origin cookie or a caller-configured client); this layer never
//! constructs or inspects them.

use reqwest::header::ACCEPT;
use serde::{de::DeserializeOwned, Serialize};

use eventdesk_api::Envelope;

use crate::endpoint::{Endpoint, NoBody, NoContent};
use crate::error::GatewayError;
use crate::uri::{format_path, join_base, PathParams};

/// Typed client for the eventdesk gateway.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base: String,
}

impl Gateway {
    /// Create a gateway client with a default `reqwest::Client`.
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    /// Create a gateway client around a pre-configured `reqwest::Client`
    /// (e.g. one that attaches bearer credentials to every request).
    pub fn with_client(http: reqwest::Client, base: impl Into<String>) -> Self {
        Self {
            http,
            base: base.into(),
        }
    }

    /// The configured base address.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url<P: PathParams>(&self, template: &str, params: &P) -> Result<String, GatewayError> {
        let path = format_path(template, params)?;
        Ok(join_base(&self.base, &path))
    }

    /// Dataless executor: perform the endpoint's method with no body and
    /// resolve with the `result` field of the response envelope.
    pub async fn get<P, R>(
        &self,
        endpoint: &Endpoint<P, NoBody, R>,
        params: &P,
    ) -> Result<R, GatewayError>
    where
        P: PathParams,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint.uri, params)?;
        tracing::debug!("{} {url}", endpoint.method.as_str());
        let response = self
            .http
            .request(endpoint.method.as_reqwest(), &url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;
        let envelope: Envelope<R> = response.json().await?;
        Ok(envelope.result)
    }

    /// Dataless executor for deletes: perform the call and discard any
    /// payload — a delete resolves with no value even if the gateway sends one.
    pub async fn delete<P>(
        &self,
        endpoint: &Endpoint<P, NoBody, NoContent>,
        params: &P,
    ) -> Result<(), GatewayError>
    where
        P: PathParams,
    {
        let url = self.url(endpoint.uri, params)?;
        tracing::debug!("{} {url}", endpoint.method.as_str());
        self.http
            .request(endpoint.method.as_reqwest(), &url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Body-carrying executor: serialize `body` as JSON, perform the
    /// endpoint's method, and resolve with the envelope's `result`.
    pub async fn post<P, B, R>(
        &self,
        endpoint: &Endpoint<P, B, R>,
        params: &P,
        body: &B,
    ) -> Result<R, GatewayError>
    where
        P: PathParams,
        B: Serialize,
        R: DeserializeOwned,
    {
        self.send_json(endpoint, params, body).await
    }

    /// Body-carrying executor for partial updates. Identical wire behaviour
    /// to [`Gateway::post`]; the verb comes from the endpoint descriptor.
    pub async fn patch<P, B, R>(
        &self,
        endpoint: &Endpoint<P, B, R>,
        params: &P,
        body: &B,
    ) -> Result<R, GatewayError>
    where
        P: PathParams,
        B: Serialize,
        R: DeserializeOwned,
    {
        self.send_json(endpoint, params, body).await
    }

    async fn send_json<P, B, R>(
        &self,
        endpoint: &Endpoint<P, B, R>,
        params: &P,
        body: &B,
    ) -> Result<R, GatewayError>
    where
        P: PathParams,
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint.uri, params)?;
        tracing::debug!("{} {url}", endpoint.method.as_str());
        let response = self
            .http
            .request(endpoint.method.as_reqwest(), &url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        let envelope: Envelope<R> = response.json().await?;
        Ok(envelope.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Method;
    use crate::uri::NoParams;

    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    const PING: Endpoint<NoParams, NoBody, String> =
        Endpoint::new(Method::Get, "/ping", "Fetch the gateway liveness string");

    const PING_DELETE: Endpoint<NoParams, NoBody, NoContent> =
        Endpoint::new(Method::Delete, "/ping", "Clear the gateway liveness string");

    const BROKEN: Endpoint<NoParams, NoBody, String> =
        Endpoint::new(Method::Get, "/broken", "Always fails");

    /// Spawn a loopback axum server and return its base URL.
    async fn spawn_mock_gateway(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn ping_handler() -> Json<Value> {
        Json(json!({ "result": "pong" }))
    }

    #[tokio::test]
    async fn get_unwraps_the_envelope() {
        let app = Router::new().route("/ping", get(ping_handler));
        let base = spawn_mock_gateway(app).await;

        let gw = Gateway::new(base);
        let result = gw.get(&PING, &NoParams).await.unwrap();
        assert_eq!(result, "pong");
    }

    #[tokio::test]
    async fn delete_resolves_with_no_value_even_when_result_is_present() {
        let app = Router::new().route("/ping", get(ping_handler).delete(ping_handler));
        let base = spawn_mock_gateway(app).await;

        let gw = Gateway::new(base);
        gw.delete(&PING_DELETE, &NoParams).await.unwrap();
    }

    #[tokio::test]
    async fn non_2xx_status_surfaces_as_an_error() {
        async fn broken_handler() -> (StatusCode, Json<Value>) {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "boom", "code": "internal_error" })),
            )
        }
        let app = Router::new().route("/broken", get(broken_handler));
        let base = spawn_mock_gateway(app).await;

        let gw = Gateway::new(base);
        let err = gw.get(&BROKEN, &NoParams).await.unwrap_err();
        assert!(matches!(err, GatewayError::Http(_)));
    }

    #[tokio::test]
    async fn missing_result_field_surfaces_as_an_error() {
        async fn bare_handler() -> Json<Value> {
            Json(json!({ "pong": true }))
        }
        let app = Router::new().route("/ping", get(bare_handler));
        let base = spawn_mock_gateway(app).await;

        let gw = Gateway::new(base);
        let err = gw.get(&PING, &NoParams).await.unwrap_err();
        assert!(matches!(err, GatewayError::Http(_)));
    }

    #[tokio::test]
    async fn connection_refused_surfaces_as_an_error() {
        // Bind then drop a listener so the port is closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gw = Gateway::new(format!("http://{addr}"));
        let err = gw.get(&PING, &NoParams).await.unwrap_err();
        assert!(matches!(err, GatewayError::Http(_)));
    }
}
