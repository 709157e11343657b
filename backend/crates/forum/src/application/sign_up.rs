//! Sign Up Use Case
//!
//! Creates a new user account with tier regular.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::ForumResult;

/// Sign up input. Fields arrive already trimmed and non-empty from form
/// validation.
pub struct SignUpInput {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

/// Sign up use case
///
/// No duplicate-username check is performed: two users may sign up with the
/// same username and both records are kept. Deliberately preserved, see
/// DESIGN.md.
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> ForumResult<()> {
        // Fresh random salt, fixed cost factor; the plaintext is never stored.
        let password_hash = ClearTextPassword::new(input.password).hash()?;

        let user = User::new(
            input.first_name,
            input.last_name,
            input.username,
            password_hash,
        );

        self.user_repo.create_user(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User signed up"
        );

        Ok(())
    }
}
