//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared via `Arc`; nothing here is read from globals.

use std::fmt;

/// Field rules applied to request payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Minimum display name length (characters)
    pub name_min: usize,
    /// Maximum display name length (characters)
    pub name_max: usize,
    /// Minimum password length (characters)
    pub password_min: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min: 3,
            name_max: 50,
            password_min: platform::password::MIN_PASSWORD_LENGTH,
        }
    }
}

/// Auth application configuration
#[derive(Clone, Default)]
pub struct AuthConfig {
    /// Shared HMAC secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// Payload rules
    pub rules: ValidationRules,
}

impl AuthConfig {
    /// Config with the given signing secret and default rules
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            rules: ValidationRules::default(),
        }
    }

    /// Whether a signing secret is configured
    pub fn has_secret(&self) -> bool {
        !self.jwt_secret.is_empty()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("rules", &self.rules)
            .finish()
    }
}
