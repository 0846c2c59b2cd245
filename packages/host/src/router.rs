//! Assembles the static-hosting router.
//!
//! One `ServeDir` serves the compiled console bundle; unknown paths fall
//! back to `index.html` so the single-page app owns routing on the client
//! side. The credential gate wraps everything, including the fallback.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::auth::{require_credentials, CredentialVerifier};

/// Build the hosting router around the bundle directory and verifier.
pub fn build_router(bundle_dir: &Path, verifier: Arc<dyn CredentialVerifier>) -> Router {
    let bundle = ServeDir::new(bundle_dir)
        .fallback(ServeFile::new(bundle_dir.join("index.html")));

    Router::new()
        .fallback_service(bundle)
        .layer(axum::middleware::from_fn(move |request, next| {
            require_credentials(Arc::clone(&verifier), request, next)
        }))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenVerifier;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Write a throwaway bundle directory and return its path.
    ///
    /// The path is suffixed with the process id so runs never collide, and
    /// any leftover from a recycled pid is cleared before writing.
    fn write_bundle(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "eventdesk-host-test-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<!doctype html><title>console</title>").unwrap();
        std::fs::write(dir.join("app.js"), "// bundle").unwrap();
        dir
    }

    fn test_router(name: &str) -> Router {
        let dir = write_bundle(name);
        build_router(&dir, Arc::new(StaticTokenVerifier::new("tok123")))
    }

    #[tokio::test]
    async fn unauthenticated_request_is_rejected() {
        let app = test_router("unauth");
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "unauthorized");
    }

    #[tokio::test]
    async fn bearer_token_unlocks_the_bundle() {
        let app = test_router("bearer");
        let response = app
            .oneshot(
                Request::get("/app.js")
                    .header(header::AUTHORIZATION, "Bearer tok123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn session_cookie_unlocks_the_bundle() {
        let app = test_router("cookie");
        let response = app
            .oneshot(
                Request::get("/")
                    .header(header::COOKIE, "eventdesk_session=tok123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_the_document() {
        let app = test_router("fallback");
        let response = app
            .oneshot(
                Request::get("/events/ev41/comments")
                    .header(header::AUTHORIZATION, "Bearer tok123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("<title>console</title>"));
    }

    #[tokio::test]
    async fn wrong_token_is_rejected() {
        let app = test_router("wrong");
        let response = app
            .oneshot(
                Request::get("/")
                    .header(header::AUTHORIZATION, "Bearer nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
