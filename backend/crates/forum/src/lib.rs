//! Forum Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, forms, views, router
//!
//! ## Features
//! - User sign-up with first/last name, username and password
//! - Cookie-session log-in/log-out (signed opaque token)
//! - Chronological post feed, newest first
//! - Post creation by the current identity
//! - Membership upgrade via a shared admin secret
//!
//! ## Inherited behavior
//! This is a faithful port of a small legacy forum. Several of its gaps are
//! preserved on purpose and documented in DESIGN.md: duplicate usernames are
//! accepted, post creation does not require a signed-in user, and failed
//! log-ins redirect to the feed without an error page.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::ForumConfig;
pub use error::{ForumError, ForumResult};
pub use infra::postgres::PgForumRepository;
pub use presentation::router::forum_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgForumRepository as ForumStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
