//! Session Entity
//!
//! Server-side record tying an opaque cookie token to a user identity.
//! Only the user id is stored; the full user record is re-fetched on every
//! request so a stale session can never resurrect deleted state.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{session_id::SessionId, user_id::UserId};

/// Session entity
///
/// Created on successful log-in, deleted on log-out. The cookie carrying
/// the token is a browser-session cookie; lifetime beyond log-out is not
/// modeled here.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4); the signed cookie token wraps this
    pub session_id: SessionId,
    /// The only user data a session carries
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session for a user
    pub fn new(user_id: UserId) -> Self {
        Self {
            session_id: SessionId::new(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
