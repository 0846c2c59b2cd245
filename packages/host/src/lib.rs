//! Public surface for the `eventdesk-host` crate.
//!
//! Exposes the router builder, config, and auth seam so that tests can
//! assemble an in-process host without spawning a subprocess.

pub mod auth;
pub mod config;
pub mod router;

pub use auth::{Credential, CredentialVerifier, StaticTokenVerifier};
pub use config::{DeployProfile, HostConfig};
pub use router::build_router;
