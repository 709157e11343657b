//! User Entity

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{membership::Membership, user_id::UserId};

/// User entity
///
/// The password field always carries a hash, never the plaintext; the only
/// way to construct a `User` is with an already-hashed password.
///
/// Usernames are intended to be unique but uniqueness is not enforced, by
/// the Credential Store or anyone else. See DESIGN.md.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Login handle, also shown as the author of posts
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: HashedPassword,
    /// Membership tier ("regular" / "admin")
    pub membership: Membership,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with tier regular
    pub fn new(
        first_name: String,
        last_name: String,
        username: String,
        password_hash: HashedPassword,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            first_name,
            last_name,
            username,
            password_hash,
            membership: Membership::default(),
            created_at: Utc::now(),
        }
    }

    /// Full name for display ("First Last")
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Promote to admin. The only mutation this system ever applies to a
    /// user's tier.
    pub fn promote_to_admin(&mut self) {
        self.membership = Membership::Admin;
    }
}
