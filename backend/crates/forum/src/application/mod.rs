//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_identity;
pub mod feed;
pub mod log_in;
pub mod log_out;
pub mod new_post;
pub mod session_token;
pub mod sign_up;
pub mod upgrade_status;

// Re-exports
pub use config::ForumConfig;
pub use current_identity::CurrentIdentityUseCase;
pub use feed::FeedUseCase;
pub use log_in::{LogInInput, LogInOutcome, LogInUseCase};
pub use log_out::LogOutUseCase;
pub use new_post::{NewPostInput, NewPostUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use upgrade_status::{UpgradeOutcome, UpgradeStatusUseCase};
