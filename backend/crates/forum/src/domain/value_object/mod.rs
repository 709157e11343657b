//! Value Object Module

pub mod membership;
pub mod post_id;
pub mod session_id;
pub mod user_id;

pub use membership::Membership;
pub use post_id::PostId;
pub use session_id::SessionId;
pub use user_id::UserId;
