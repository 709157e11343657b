//! Presentation Layer
//!
//! Form DTOs, HTTP handlers, identity middleware, HTML views and the router.

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod views;
