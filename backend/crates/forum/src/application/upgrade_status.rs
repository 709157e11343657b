//! Upgrade Status Use Case
//!
//! Promotes the current user to admin when the submitted secret matches the
//! server-held one. Unlimited attempts are allowed — no lockout, no
//! attempt counting (explicit non-goal of this system).

use std::sync::Arc;

use crate::application::config::ForumConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{ForumError, ForumResult};

/// Upgrade outcome
#[derive(Debug)]
pub enum UpgradeOutcome {
    /// Secret matched; the current user is now admin
    Promoted,
    /// Secret did not match; nothing changed
    WrongPassword,
}

/// Upgrade status use case
pub struct UpgradeStatusUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<ForumConfig>,
}

impl<U> UpgradeStatusUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<ForumConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Compare the submitted secret and promote on an exact match.
    ///
    /// A matching secret with no current identity is a `NoIdentity` error:
    /// the legacy handler dereferenced the absent user and crashed, and the
    /// resulting 500 is part of the observable contract.
    pub async fn execute(
        &self,
        submitted_secret: &str,
        identity: Option<User>,
    ) -> ForumResult<UpgradeOutcome> {
        if submitted_secret != self.config.upgrade_pass {
            tracing::debug!("Upgrade attempt with wrong secret");
            return Ok(UpgradeOutcome::WrongPassword);
        }

        let mut user = identity.ok_or(ForumError::NoIdentity)?;

        user.promote_to_admin();
        self.user_repo.update_membership(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User promoted to admin"
        );

        Ok(UpgradeOutcome::Promoted)
    }
}
