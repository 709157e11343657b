//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{post::FeedItem, post::Post, session::Session, user::User};
use crate::domain::value_object::{session_id::SessionId, user_id::UserId};
use crate::error::ForumResult;

/// User repository trait (the Credential Store)
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create_user(&self, user: &User) -> ForumResult<()>;

    /// Find user by ID
    async fn find_user_by_id(&self, user_id: &UserId) -> ForumResult<Option<User>>;

    /// Find user by exact username match.
    ///
    /// Usernames are not unique; when duplicates exist an arbitrary one
    /// wins (LIMIT 1), matching the legacy lookup.
    async fn find_user_by_username(&self, username: &str) -> ForumResult<Option<User>>;

    /// Set a user's membership tier
    async fn update_membership(&self, user: &User) -> ForumResult<()>;
}

/// Post repository trait (the Post Store)
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create_post(&self, post: &Post) -> ForumResult<()>;

    /// All posts, newest first, each LEFT-JOINed to its author.
    ///
    /// No pagination: the feed is a full scan, acceptable only at the
    /// scale this system targets.
    async fn list_feed(&self) -> ForumResult<Vec<FeedItem>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create_session(&self, session: &Session) -> ForumResult<()>;

    /// Find session by ID
    async fn find_session_by_id(&self, session_id: &SessionId) -> ForumResult<Option<Session>>;

    /// Delete a session (log-out)
    async fn delete_session(&self, session_id: &SessionId) -> ForumResult<()>;
}
