//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) with zeroized clear text
//! - Signed, time-bounded bearer tokens (JWT, HMAC family only)

pub mod password;
pub mod token;
