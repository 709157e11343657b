//! Current Identity Use Case
//!
//! Per-request identity resolution, run before handler dispatch. The
//! session stores only a user id; this re-fetches the full user record on
//! every request.
//!
//! Anything short of a storage fault resolves to "not signed in": a bad
//! signature, a missing session row, or a session whose user no longer
//! exists (not reachable through this system's own operations, but handled
//! defensively).

use std::sync::Arc;

use crate::application::config::ForumConfig;
use crate::application::session_token;
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::ForumResult;

/// Current identity use case
pub struct CurrentIdentityUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<ForumConfig>,
}

impl<U, S> CurrentIdentityUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<ForumConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Resolve the presented token (if any) to a user.
    pub async fn resolve(&self, session_token: Option<&str>) -> ForumResult<Option<User>> {
        let Some(token) = session_token else {
            return Ok(None);
        };

        let session_id = match session_token::parse(token, &self.config.session_secret) {
            Ok(id) => id,
            Err(_) => return Ok(None),
        };

        let Some(session) = self.session_repo.find_session_by_id(&session_id).await? else {
            return Ok(None);
        };

        let user = self.user_repo.find_user_by_id(&session.user_id).await?;

        if user.is_none() {
            tracing::warn!(
                session_id = %session_id,
                user_id = %session.user_id,
                "Session resolves to a missing user"
            );
        }

        Ok(user)
    }
}
