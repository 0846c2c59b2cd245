//! The transport envelope every successful gateway response uses.

use serde::{Deserialize, Serialize};

/// Wrapper around every successful response body.
///
/// ```json
/// { "result": <payload> }
/// ```
///
/// The envelope is a fixed backend contract: the gateway never returns a bare
/// payload, and the client strips the wrapper before handing the payload to
/// the caller. Delete responses carry no meaningful `result` and are never
/// deserialized through this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub result: T,
}

impl<T> Envelope<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

/// Identifier-only acknowledgment returned by every mutating endpoint.
///
/// ```json
/// { "result": { "id": "ev41" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModifyAck {
    /// Identifier of the created or modified record.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_roundtrip() {
        let e = Envelope::new(ModifyAck { id: "ev41".into() });
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"result":{"id":"ev41"}}"#);
        let back: Envelope<ModifyAck> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn missing_result_field_is_an_error() {
        let err = serde_json::from_str::<Envelope<ModifyAck>>(r#"{"id":"ev41"}"#);
        assert!(err.is_err());
    }
}
