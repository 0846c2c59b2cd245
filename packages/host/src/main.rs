//! `eventdesk-host` — serves the compiled console bundle behind a credential gate.
//!
//! # Quick start
//!
//! ```sh
//! # Local development against a gateway on localhost:
//! EVENTDESK_TOKEN=dev-token eventdesk-host
//!
//! # Containerised deployment:
//! EVENTDESK_ENV=docker EVENTDESK_BUNDLE=/srv/console EVENTDESK_TOKEN=… eventdesk-host
//! ```
//!
//! # Environment variables
//!
//! See [`eventdesk_host::HostConfig::from_env`] for the full list.

use std::sync::Arc;

use eventdesk_host::{build_router, HostConfig, StaticTokenVerifier};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventdesk_host=info,tower_http=debug".into()),
        )
        .init();

    let config = HostConfig::from_env();

    tracing::info!("profile: {:?}", config.profile);
    tracing::info!("gateway: {}", config.gateway_base);
    tracing::info!("bundle: {}", config.bundle_dir.display());

    let verifier = Arc::new(StaticTokenVerifier::new(config.token.clone()));
    let app = build_router(&config.bundle_dir, verifier);

    tracing::info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {e}", config.bind_addr));

    axum::serve(listener, app).await.expect("server error");
}
