//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing and verification (bcrypt)
//! - Cookie management

pub mod cookie;
pub mod password;
