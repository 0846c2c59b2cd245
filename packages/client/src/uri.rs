//! URI template formatting — `{name}` placeholder substitution and base joining.
//!
//! Endpoint URIs are declared as templates (`/events/{eventID}/comments`);
//! at call time each placeholder is replaced with the percent-encoded value
//! supplied by the endpoint's params record. A template that still contains
//! a placeholder after substitution is rejected before any request is made,
//! so a binding mistake never reaches the wire.

use std::borrow::Cow;

use thiserror::Error;
use urlencoding::encode;

/// Errors that can occur while expanding a URI template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UriError {
    #[error("unresolved placeholder {placeholder} in URI template '{template}'")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
    },
}

/// Named path parameters for one endpoint.
///
/// Each endpoint declares a fixed-shape record implementing this trait, so
/// supplying the wrong parameters for a template is a compile error rather
/// than a malformed request. [`NoParams`] covers collection-level endpoints
/// whose templates have no placeholders.
pub trait PathParams {
    /// The `(placeholder name, value)` pairs to substitute into the template.
    fn pairs(&self) -> Vec<(&'static str, Cow<'_, str>)>;
}

/// Parameter record for endpoints whose URI template has no placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParams;

impl PathParams for NoParams {
    fn pairs(&self) -> Vec<(&'static str, Cow<'_, str>)> {
        Vec::new()
    }
}

/// Expand a URI template by substituting each `{key}` with its
/// percent-encoded value.
///
/// Only the first occurrence of each placeholder is replaced. Any
/// placeholder left after all substitutions is an error.
pub fn format_path(template: &str, params: &impl PathParams) -> Result<String, UriError> {
    let mut path = template.to_string();
    for (key, value) in params.pairs() {
        let placeholder = format!("{{{key}}}");
        if let Some(pos) = path.find(&placeholder) {
            path.replace_range(pos..pos + placeholder.len(), &encode(&value));
        }
    }

    if let Some(start) = path.find('{') {
        let end = path[start..]
            .find('}')
            .map(|i| start + i + 1)
            .unwrap_or(path.len());
        return Err(UriError::UnresolvedPlaceholder {
            template: template.to_string(),
            placeholder: path[start..end].to_string(),
        });
    }

    Ok(path)
}

/// Join an expanded path onto the gateway base address with exactly one `/`
/// at the seam, whatever combination of trailing and leading slashes the
/// two sides carry.
pub fn join_base(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CommentPath<'a> {
        id: &'a str,
        comment_id: &'a str,
    }

    impl PathParams for CommentPath<'_> {
        fn pairs(&self) -> Vec<(&'static str, Cow<'_, str>)> {
            vec![
                ("id", Cow::Borrowed(self.id)),
                ("commentID", Cow::Borrowed(self.comment_id)),
            ]
        }
    }

    struct OneParam<'a>(&'a str);

    impl PathParams for OneParam<'_> {
        fn pairs(&self) -> Vec<(&'static str, Cow<'_, str>)> {
            vec![("id", Cow::Borrowed(self.0))]
        }
    }

    #[test]
    fn substitutes_every_placeholder() {
        let path = format_path(
            "/events/{id}/comments/{commentID}",
            &CommentPath {
                id: "e1",
                comment_id: "c2",
            },
        )
        .unwrap();
        assert_eq!(path, "/events/e1/comments/c2");
        assert!(!path.contains('{') && !path.contains('}'));
    }

    #[test]
    fn joined_uri_matches_worked_example() {
        let path = format_path(
            "/events/{id}/comments/{commentID}",
            &CommentPath {
                id: "e1",
                comment_id: "c2",
            },
        )
        .unwrap();
        assert_eq!(join_base("http://gw/", &path), "http://gw/events/e1/comments/c2");
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let path = format_path("/files/{id}", &OneParam("a/b?c&d e")).unwrap();
        assert_eq!(path, "/files/a%2Fb%3Fc%26d%20e");
    }

    #[test]
    fn unresolved_placeholder_fails_fast() {
        let err = format_path("/events/{id}/comments/{commentID}", &OneParam("e1")).unwrap_err();
        assert_eq!(
            err,
            UriError::UnresolvedPlaceholder {
                template: "/events/{id}/comments/{commentID}".into(),
                placeholder: "{commentID}".into(),
            }
        );
    }

    #[test]
    fn no_params_passes_placeholder_free_templates() {
        assert_eq!(format_path("/events", &NoParams).unwrap(), "/events");
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        let err = format_path("/pairs/{id}/{id}", &OneParam("x")).unwrap_err();
        assert!(matches!(err, UriError::UnresolvedPlaceholder { .. }));
    }

    #[test]
    fn join_normalizes_all_four_slash_combinations() {
        let expected = "http://gw/events";
        assert_eq!(join_base("http://gw", "events"), expected);
        assert_eq!(join_base("http://gw/", "events"), expected);
        assert_eq!(join_base("http://gw", "/events"), expected);
        assert_eq!(join_base("http://gw/", "/events"), expected);
    }
}
