//! Infrastructure Layer
//!
//! Database implementation and store-error classification.

pub mod classifier;
pub mod postgres;

pub use postgres::PgUserRepository;
