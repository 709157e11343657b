//! Log In Use Case
//!
//! Authenticates a user and creates a session.
//!
//! Rejections are outcomes, not errors: the caller redirects to the feed
//! either way and the reason is never shown to the client. Only storage
//! faults surface as `ForumError`.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::ForumConfig;
use crate::application::session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::ForumResult;

/// Log in input
pub struct LogInInput {
    pub username: String,
    pub password: String,
}

/// Log in outcome
pub enum LogInOutcome {
    /// Session established; token goes into the cookie
    Authenticated { session_token: String },
    /// No user with that username
    UnknownUser,
    /// User exists, password did not verify
    BadPassword,
}

/// Log in use case
pub struct LogInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<ForumConfig>,
}

impl<U, S> LogInUseCase<U, S>
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

    pub async fn execute(&self, input: LogInInput) -> ForumResult<LogInOutcome> {
        // Exact-match lookup; duplicates resolve to an arbitrary row.
        let user = match self.user_repo.find_user_by_username(&input.username).await? {
            Some(user) => user,
            None => {
                tracing::debug!(username = %input.username, "Log-in for unknown username");
                return Ok(LogInOutcome::UnknownUser);
            }
        };

        // Constant-time comparison inside the bcrypt library.
        let password = ClearTextPassword::new(input.password);
        if !user.password_hash.verify(&password) {
            tracing::debug!(username = %user.username, "Log-in with bad password");
            return Ok(LogInOutcome::BadPassword);
        }

        // Only the user id goes into the session; the full record is
        // re-fetched on every request.
        let session = Session::new(user.user_id);
        self.session_repo.create_session(&session).await?;

        let session_token = session_token::generate(&session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LogInOutcome::Authenticated { session_token })
    }
}
