//! Host configuration, populated from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Deployment profile, selected by `EVENTDESK_ENV`.
///
/// Each profile carries the default gateway base address the deployment
/// talks to; `EVENTDESK_GATEWAY` overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployProfile {
    /// Live deployment behind the organisation's reverse proxy.
    Production,
    /// Containerised development: the gateway runs as a sibling container.
    Docker,
    /// Local development against a gateway on localhost.
    Development,
}

impl DeployProfile {
    /// Parse the `EVENTDESK_ENV` value. Unrecognised values fall back to
    /// [`DeployProfile::Development`].
    pub fn parse(value: &str) -> Self {
        match value {
            "production" => DeployProfile::Production,
            "docker" => DeployProfile::Docker,
            _ => DeployProfile::Development,
        }
    }

    /// The gateway base address this profile talks to by default.
    pub fn default_gateway(self) -> &'static str {
        match self {
            DeployProfile::Production => "https://gateway.eventdesk.internal/api",
            DeployProfile::Docker => "http://gateway:8000/api",
            DeployProfile::Development => "http://localhost:8000/api",
        }
    }
}

/// Runtime configuration for the hosting layer.
///
/// All fields are populated from environment variables with defaults, so the
/// host starts with zero configuration in local development.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `EVENTDESK_ENV` | `development` | Deployment profile (`production`, `docker`, `development`) |
/// | `EVENTDESK_GATEWAY` | per profile | Gateway base address override |
/// | `EVENTDESK_BIND` | `0.0.0.0:8080` | TCP socket address to listen on |
/// | `EVENTDESK_BUNDLE` | `./dist` | Directory holding the compiled console bundle |
/// | `EVENTDESK_TOKEN` | (required) | Token accepted by the built-in credential verifier |
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Selected deployment profile.
    pub profile: DeployProfile,

    /// Resolved gateway base address, after any override.
    pub gateway_base: String,

    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,

    /// Directory holding the compiled console bundle.
    pub bundle_dir: PathBuf,

    /// Token accepted by the built-in credential verifier.
    pub token: String,
}

impl HostConfig {
    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Self {
        let profile = DeployProfile::parse(
            &std::env::var("EVENTDESK_ENV").unwrap_or_else(|_| "development".into()),
        );

        let gateway_base = std::env::var("EVENTDESK_GATEWAY")
            .unwrap_or_else(|_| profile.default_gateway().to_string());

        let bind_addr: SocketAddr = std::env::var("EVENTDESK_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".into())
            .parse()
            .expect("EVENTDESK_BIND must be a valid socket address (e.g. 0.0.0.0:8080)");

        let bundle_dir = PathBuf::from(
            std::env::var("EVENTDESK_BUNDLE").unwrap_or_else(|_| "./dist".into()),
        );

        let token =
            std::env::var("EVENTDESK_TOKEN").expect("EVENTDESK_TOKEN must be set to gate the console");

        Self {
            profile,
            gateway_base,
            bind_addr,
            bundle_dir,
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_falls_back_to_development() {
        assert_eq!(DeployProfile::parse("staging"), DeployProfile::Development);
        assert_eq!(DeployProfile::parse(""), DeployProfile::Development);
    }

    #[test]
    fn profiles_resolve_distinct_gateways() {
        let production = DeployProfile::parse("production").default_gateway();
        let docker = DeployProfile::parse("docker").default_gateway();
        let development = DeployProfile::parse("development").default_gateway();
        assert_ne!(production, docker);
        assert_ne!(docker, development);
        assert_ne!(production, development);
    }
}
