//! Endpoint descriptors — the binding between a URI template and an executor.
//!
//! An [`Endpoint`] carries everything known about one gateway operation at
//! compile time: the HTTP method, the unexpanded URI template, a
//! human-readable description, and (as type parameters) the shapes of its
//! path parameters, request body, and result. The descriptor is immutable
//! once declared; invoking it through [`crate::Gateway`] forwards the bound
//! template plus the caller's arguments to the matching executor.

use std::marker::PhantomData;

/// The HTTP methods the gateway API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Marker for endpoints that send no request body (GET, DELETE).
#[derive(Debug, Clone, Copy)]
pub struct NoBody;

/// Marker for endpoints whose response carries no payload (DELETE).
#[derive(Debug, Clone, Copy)]
pub struct NoContent;

/// A self-describing gateway operation.
///
/// * `P` — the path-parameter record ([`crate::uri::NoParams`] for
///   collection-level templates).
/// * `B` — the JSON request body ([`NoBody`] for dataless methods).
/// * `R` — the payload inside the response envelope ([`NoContent`] for
///   deletes).
pub struct Endpoint<P, B, R> {
    /// HTTP method the operation is issued with.
    pub method: Method,

    /// The unexpanded URI template, e.g. `/events/{eventID}`.
    pub uri: &'static str,

    /// Human-readable documentation for the operation.
    pub description: &'static str,

    marker: PhantomData<fn(P, B) -> R>,
}

impl<P, B, R> Endpoint<P, B, R> {
    pub const fn new(method: Method, uri: &'static str, description: &'static str) -> Self {
        Self {
            method,
            uri,
            description,
            marker: PhantomData,
        }
    }

    /// The descriptor's type-erased metadata, as listed in
    /// [`crate::endpoints::ENDPOINTS`].
    pub const fn meta(&self) -> EndpointMeta {
        EndpointMeta {
            method: self.method,
            uri: self.uri,
            description: self.description,
        }
    }
}

/// Type-erased endpoint metadata, for introspection and documentation.
#[derive(Debug, Clone, Copy)]
pub struct EndpointMeta {
    pub method: Method,
    pub uri: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uri::NoParams;

    const PROBE: Endpoint<NoParams, NoBody, NoContent> =
        Endpoint::new(Method::Get, "/probe", "Probe endpoint");

    #[test]
    fn descriptor_exposes_uri_and_description() {
        assert_eq!(PROBE.uri, "/probe");
        assert_eq!(PROBE.description, "Probe endpoint");
        assert_eq!(PROBE.method, Method::Get);
    }

    #[test]
    fn meta_matches_descriptor() {
        let meta = PROBE.meta();
        assert_eq!(meta.uri, PROBE.uri);
        assert_eq!(meta.method.as_str(), "GET");
    }
}
