//! Fixed-shape path-parameter records, one per URI template shape.
//!
//! Every endpoint names exactly the parameters its template needs, so a
//! missing or misnamed substitution is a compile error. The placeholder
//! names match the gateway's templates (`{eventID}`, `{venueID}`, …).

use std::borrow::Cow;

use crate::uri::PathParams;

macro_rules! path_record {
    ($(#[$doc:meta])* $name:ident { $($field:ident => $placeholder:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            $(pub $field: String,)+
        }

        impl PathParams for $name {
            fn pairs(&self) -> Vec<(&'static str, Cow<'_, str>)> {
                vec![$(($placeholder, Cow::Borrowed(self.$field.as_str())),)+]
            }
        }
    };
}

path_record!(
    /// Parameters for `/events/{eventID}` and its nested collections.
    EventPath { event_id => "eventID" }
);

path_record!(
    /// Parameters for `/events/{eventID}/comments/{commentID}`.
    CommentPath {
        event_id => "eventID",
        comment_id => "commentID",
    }
);

path_record!(
    /// Parameters for `/events/{eventID}/signups/{signupID}`.
    SignupPath {
        event_id => "eventID",
        signup_id => "signupID",
    }
);

path_record!(
    /// Parameters for `/venues/{venueID}` and `/venues/{venueID}/events`.
    VenuePath { venue_id => "venueID" }
);

path_record!(
    /// Parameters for `/ents/{entID}`.
    EntPath { ent_id => "entID" }
);

path_record!(
    /// Parameters for `/states/{stateID}`.
    StatePath { state_id => "stateID" }
);

path_record!(
    /// Parameters for `/topics/{topicID}`.
    TopicPath { topic_id => "topicID" }
);

path_record!(
    /// Parameters for `/files/{fileID}`.
    FilePath { file_id => "fileID" }
);

path_record!(
    /// Parameters for `/users/{userID}`.
    UserPath { user_id => "userID" }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uri::format_path;

    #[test]
    fn comment_path_fills_both_placeholders() {
        let params = CommentPath {
            event_id: "e1".into(),
            comment_id: "c2".into(),
        };
        let path = format_path("/events/{eventID}/comments/{commentID}", &params).unwrap();
        assert_eq!(path, "/events/e1/comments/c2");
    }

    #[test]
    fn values_are_encoded_in_declared_order() {
        let params = SignupPath {
            event_id: "summer ball".into(),
            signup_id: "s/1".into(),
        };
        let path = format_path("/events/{eventID}/signups/{signupID}", &params).unwrap();
        assert_eq!(path, "/events/summer%20ball/signups/s%2F1");
    }
}
