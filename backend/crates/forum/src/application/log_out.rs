//! Log Out Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use crate::application::config::ForumConfig;
use crate::application::session_token;
use crate::domain::repository::SessionRepository;
use crate::error::ForumResult;

/// Log out use case
pub struct LogOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<ForumConfig>,
}

impl<S> LogOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<ForumConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session named by the token.
    ///
    /// An unparseable token is not an error at log-out: there is nothing to
    /// invalidate. Storage failures do propagate, per the error design.
    pub async fn execute(&self, session_token: &str) -> ForumResult<()> {
        let session_id = match session_token::parse(session_token, &self.config.session_secret) {
            Ok(id) => id,
            Err(_) => return Ok(()),
        };

        self.session_repo.delete_session(&session_id).await?;

        tracing::info!(session_id = %session_id, "User logged out");
        Ok(())
    }
}
