//! The API surface tree — resource clients mirroring the gateway's REST
//! hierarchy.
//!
//! The addressable shape follows the backend's nesting: collection clients
//! (`gw.events()`) expose list/create plus `by_id`, which yields an item
//! client with read/update/delete and any nested collections
//! (`gw.events().by_id("e1").comments()`). Verbs a resource does not
//! support are simply not defined, so misuse fails at compile time.

use eventdesk_api::{
    AttachFile, CommentResponse, CreateComment, CreateEntState, CreateEvent, CreateFile,
    CreateSignup, CreateState, CreateTopic, CreateVenue, EntStateResponse, EventResponse,
    FileResponse, ModifyAck, SignupResponse, StateResponse, TopicResponse, UpdateComment,
    UpdateEntState, UpdateEvent, UpdateSignup, UpdateState, UpdateTopic, UpdateVenue,
    UserResponse, VenueResponse,
};

use crate::endpoints::*;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::params::{
    CommentPath, EntPath, EventPath, FilePath, SignupPath, StatePath, TopicPath, UserPath,
    VenuePath,
};
use crate::uri::NoParams;

impl Gateway {
    pub fn events(&self) -> EventsClient<'_> {
        EventsClient { gw: self }
    }

    pub fn venues(&self) -> VenuesClient<'_> {
        VenuesClient { gw: self }
    }

    pub fn ents(&self) -> EntsClient<'_> {
        EntsClient { gw: self }
    }

    pub fn states(&self) -> StatesClient<'_> {
        StatesClient { gw: self }
    }

    pub fn topics(&self) -> TopicsClient<'_> {
        TopicsClient { gw: self }
    }

    pub fn files(&self) -> FilesClient<'_> {
        FilesClient { gw: self }
    }

    pub fn users(&self) -> UsersClient<'_> {
        UsersClient { gw: self }
    }
}

// --- events ----------------------------------------------------------------

pub struct EventsClient<'g> {
    gw: &'g Gateway,
}

impl<'g> EventsClient<'g> {
    pub async fn list(&self) -> Result<Vec<EventResponse>, GatewayError> {
        self.gw.get(&EVENTS_LIST, &NoParams).await
    }

    pub async fn create(&self, body: &CreateEvent) -> Result<ModifyAck, GatewayError> {
        self.gw.post(&EVENTS_CREATE, &NoParams, body).await
    }

    pub fn by_id(&self, event_id: impl Into<String>) -> EventClient<'g> {
        EventClient {
            gw: self.gw,
            path: EventPath {
                event_id: event_id.into(),
            },
        }
    }
}

pub struct EventClient<'g> {
    gw: &'g Gateway,
    path: EventPath,
}

impl<'g> EventClient<'g> {
    pub async fn get(&self) -> Result<EventResponse, GatewayError> {
        self.gw.get(&EVENT_GET, &self.path).await
    }

    pub async fn update(&self, body: &UpdateEvent) -> Result<ModifyAck, GatewayError> {
        self.gw.patch(&EVENT_UPDATE, &self.path, body).await
    }

    pub async fn delete(&self) -> Result<(), GatewayError> {
        self.gw.delete(&EVENT_DELETE, &self.path).await
    }

    pub fn comments(&self) -> CommentsClient<'g> {
        CommentsClient {
            gw: self.gw,
            path: self.path.clone(),
        }
    }

    pub fn signups(&self) -> SignupsClient<'g> {
        SignupsClient {
            gw: self.gw,
            path: self.path.clone(),
        }
    }

    pub fn files(&self) -> EventFilesClient<'g> {
        EventFilesClient {
            gw: self.gw,
            path: self.path.clone(),
        }
    }
}

pub struct CommentsClient<'g> {
    gw: &'g Gateway,
    path: EventPath,
}

impl<'g> CommentsClient<'g> {
    pub async fn list(&self) -> Result<Vec<CommentResponse>, GatewayError> {
        self.gw.get(&EVENT_COMMENTS_LIST, &self.path).await
    }

    pub async fn create(&self, body: &CreateComment) -> Result<ModifyAck, GatewayError> {
        self.gw.post(&EVENT_COMMENTS_CREATE, &self.path, body).await
    }

    pub fn by_id(&self, comment_id: impl Into<String>) -> CommentClient<'g> {
        CommentClient {
            gw: self.gw,
            path: CommentPath {
                event_id: self.path.event_id.clone(),
                comment_id: comment_id.into(),
            },
        }
    }
}

pub struct CommentClient<'g> {
    gw: &'g Gateway,
    path: CommentPath,
}

impl CommentClient<'_> {
    pub async fn get(&self) -> Result<CommentResponse, GatewayError> {
        self.gw.get(&EVENT_COMMENT_GET, &self.path).await
    }

    pub async fn update(&self, body: &UpdateComment) -> Result<ModifyAck, GatewayError> {
        self.gw.patch(&EVENT_COMMENT_UPDATE, &self.path, body).await
    }

    pub async fn delete(&self) -> Result<(), GatewayError> {
        self.gw.delete(&EVENT_COMMENT_DELETE, &self.path).await
    }
}

pub struct SignupsClient<'g> {
    gw: &'g Gateway,
    path: EventPath,
}

impl<'g> SignupsClient<'g> {
    pub async fn list(&self) -> Result<Vec<SignupResponse>, GatewayError> {
        self.gw.get(&EVENT_SIGNUPS_LIST, &self.path).await
    }

    pub async fn create(&self, body: &CreateSignup) -> Result<ModifyAck, GatewayError> {
        self.gw.post(&EVENT_SIGNUPS_CREATE, &self.path, body).await
    }

    pub fn by_id(&self, signup_id: impl Into<String>) -> SignupClient<'g> {
        SignupClient {
            gw: self.gw,
            path: SignupPath {
                event_id: self.path.event_id.clone(),
                signup_id: signup_id.into(),
            },
        }
    }
}

pub struct SignupClient<'g> {
    gw: &'g Gateway,
    path: SignupPath,
}

impl SignupClient<'_> {
    pub async fn get(&self) -> Result<SignupResponse, GatewayError> {
        self.gw.get(&EVENT_SIGNUP_GET, &self.path).await
    }

    pub async fn update(&self, body: &UpdateSignup) -> Result<ModifyAck, GatewayError> {
        self.gw.patch(&EVENT_SIGNUP_UPDATE, &self.path, body).await
    }

    pub async fn delete(&self) -> Result<(), GatewayError> {
        self.gw.delete(&EVENT_SIGNUP_DELETE, &self.path).await
    }
}

pub struct EventFilesClient<'g> {
    gw: &'g Gateway,
    path: EventPath,
}

impl EventFilesClient<'_> {
    pub async fn list(&self) -> Result<Vec<FileResponse>, GatewayError> {
        self.gw.get(&EVENT_FILES_LIST, &self.path).await
    }

    pub async fn attach(&self, body: &AttachFile) -> Result<ModifyAck, GatewayError> {
        self.gw.post(&EVENT_FILES_ATTACH, &self.path, body).await
    }
}

// --- venues ----------------------------------------------------------------

pub struct VenuesClient<'g> {
    gw: &'g Gateway,
}

impl<'g> VenuesClient<'g> {
    pub async fn list(&self) -> Result<Vec<VenueResponse>, GatewayError> {
        self.gw.get(&VENUES_LIST, &NoParams).await
    }

    pub async fn create(&self, body: &CreateVenue) -> Result<ModifyAck, GatewayError> {
        self.gw.post(&VENUES_CREATE, &NoParams, body).await
    }

    pub fn by_id(&self, venue_id: impl Into<String>) -> VenueClient<'g> {
        VenueClient {
            gw: self.gw,
            path: VenuePath {
                venue_id: venue_id.into(),
            },
        }
    }
}

pub struct VenueClient<'g> {
    gw: &'g Gateway,
    path: VenuePath,
}

impl VenueClient<'_> {
    pub async fn get(&self) -> Result<VenueResponse, GatewayError> {
        self.gw.get(&VENUE_GET, &self.path).await
    }

    pub async fn update(&self, body: &UpdateVenue) -> Result<ModifyAck, GatewayError> {
        self.gw.patch(&VENUE_UPDATE, &self.path, body).await
    }

    pub async fn delete(&self) -> Result<(), GatewayError> {
        self.gw.delete(&VENUE_DELETE, &self.path).await
    }

    /// Events-by-venue: the gateway's nested listing under a venue.
    pub async fn events(&self) -> Result<Vec<EventResponse>, GatewayError> {
        self.gw.get(&VENUE_EVENTS_LIST, &self.path).await
    }
}

// --- ents states -----------------------------------------------------------

pub struct EntsClient<'g> {
    gw: &'g Gateway,
}

impl<'g> EntsClient<'g> {
    pub async fn list(&self) -> Result<Vec<EntStateResponse>, GatewayError> {
        self.gw.get(&ENTS_LIST, &NoParams).await
    }

    pub async fn create(&self, body: &CreateEntState) -> Result<ModifyAck, GatewayError> {
        self.gw.post(&ENTS_CREATE, &NoParams, body).await
    }

    pub fn by_id(&self, ent_id: impl Into<String>) -> EntClient<'g> {
        EntClient {
            gw: self.gw,
            path: EntPath {
                ent_id: ent_id.into(),
            },
        }
    }
}

pub struct EntClient<'g> {
    gw: &'g Gateway,
    path: EntPath,
}

impl EntClient<'_> {
    pub async fn get(&self) -> Result<EntStateResponse, GatewayError> {
        self.gw.get(&ENT_GET, &self.path).await
    }

    pub async fn update(&self, body: &UpdateEntState) -> Result<ModifyAck, GatewayError> {
        self.gw.patch(&ENT_UPDATE, &self.path, body).await
    }

    pub async fn delete(&self) -> Result<(), GatewayError> {
        self.gw.delete(&ENT_DELETE, &self.path).await
    }
}

// --- run states ------------------------------------------------------------

pub struct StatesClient<'g> {
    gw: &'g Gateway,
}

impl<'g> StatesClient<'g> {
    pub async fn list(&self) -> Result<Vec<StateResponse>, GatewayError> {
        self.gw.get(&STATES_LIST, &NoParams).await
    }

    pub async fn create(&self, body: &CreateState) -> Result<ModifyAck, GatewayError> {
        self.gw.post(&STATES_CREATE, &NoParams, body).await
    }

    pub fn by_id(&self, state_id: impl Into<String>) -> StateClient<'g> {
        StateClient {
            gw: self.gw,
            path: StatePath {
                state_id: state_id.into(),
            },
        }
    }
}

pub struct StateClient<'g> {
    gw: &'g Gateway,
    path: StatePath,
}

impl StateClient<'_> {
    pub async fn get(&self) -> Result<StateResponse, GatewayError> {
        self.gw.get(&STATE_GET, &self.path).await
    }

    pub async fn update(&self, body: &UpdateState) -> Result<ModifyAck, GatewayError> {
        self.gw.patch(&STATE_UPDATE, &self.path, body).await
    }

    pub async fn delete(&self) -> Result<(), GatewayError> {
        self.gw.delete(&STATE_DELETE, &self.path).await
    }
}

// --- topics ----------------------------------------------------------------

pub struct TopicsClient<'g> {
    gw: &'g Gateway,
}

impl<'g> TopicsClient<'g> {
    pub async fn list(&self) -> Result<Vec<TopicResponse>, GatewayError> {
        self.gw.get(&TOPICS_LIST, &NoParams).await
    }

    pub async fn create(&self, body: &CreateTopic) -> Result<ModifyAck, GatewayError> {
        self.gw.post(&TOPICS_CREATE, &NoParams, body).await
    }

    pub fn by_id(&self, topic_id: impl Into<String>) -> TopicClient<'g> {
        TopicClient {
            gw: self.gw,
            path: TopicPath {
                topic_id: topic_id.into(),
            },
        }
    }
}

pub struct TopicClient<'g> {
    gw: &'g Gateway,
    path: TopicPath,
}

impl TopicClient<'_> {
    pub async fn get(&self) -> Result<TopicResponse, GatewayError> {
        self.gw.get(&TOPIC_GET, &self.path).await
    }

    pub async fn update(&self, body: &UpdateTopic) -> Result<ModifyAck, GatewayError> {
        self.gw.patch(&TOPIC_UPDATE, &self.path, body).await
    }

    pub async fn delete(&self) -> Result<(), GatewayError> {
        self.gw.delete(&TOPIC_DELETE, &self.path).await
    }
}

// --- files -----------------------------------------------------------------

pub struct FilesClient<'g> {
    gw: &'g Gateway,
}

impl<'g> FilesClient<'g> {
    pub async fn list(&self) -> Result<Vec<FileResponse>, GatewayError> {
        self.gw.get(&FILES_LIST, &NoParams).await
    }

    pub async fn create(&self, body: &CreateFile) -> Result<ModifyAck, GatewayError> {
        self.gw.post(&FILES_CREATE, &NoParams, body).await
    }

    pub fn by_id(&self, file_id: impl Into<String>) -> FileClient<'g> {
        FileClient {
            gw: self.gw,
            path: FilePath {
                file_id: file_id.into(),
            },
        }
    }
}

pub struct FileClient<'g> {
    gw: &'g Gateway,
    path: FilePath,
}

impl FileClient<'_> {
    pub async fn get(&self) -> Result<FileResponse, GatewayError> {
        self.gw.get(&FILE_GET, &self.path).await
    }

    // Files are immutable once uploaded; no update verb exists.

    pub async fn delete(&self) -> Result<(), GatewayError> {
        self.gw.delete(&FILE_DELETE, &self.path).await
    }
}

// --- users (read-only) -----------------------------------------------------

pub struct UsersClient<'g> {
    gw: &'g Gateway,
}

impl<'g> UsersClient<'g> {
    pub async fn list(&self) -> Result<Vec<UserResponse>, GatewayError> {
        self.gw.get(&USERS_LIST, &NoParams).await
    }

    pub fn by_id(&self, user_id: impl Into<String>) -> UserClient<'g> {
        UserClient {
            gw: self.gw,
            path: UserPath {
                user_id: user_id.into(),
            },
        }
    }
}

pub struct UserClient<'g> {
    gw: &'g Gateway,
    path: UserPath,
}

impl UserClient<'_> {
    pub async fn get(&self) -> Result<UserResponse, GatewayError> {
        self.gw.get(&USER_GET, &self.path).await
    }
}
