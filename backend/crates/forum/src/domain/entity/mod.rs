//! Entity Module

pub mod post;
pub mod session;
pub mod user;

pub use post::{FeedItem, Post};
pub use session::Session;
pub use user::User;
