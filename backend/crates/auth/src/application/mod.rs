//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod manage_users;
pub mod password;
pub mod register;

// Re-exports
pub use config::{AuthConfig, ValidationRules};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use manage_users::{ManageUsersUseCase, UpdateUserInput};
pub use register::{RegisterInput, RegisterUseCase};
