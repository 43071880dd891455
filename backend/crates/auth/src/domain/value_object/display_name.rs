//! Display Name Value Object

use std::fmt;

use super::violation::Violation;

/// A user's display name, bounded in characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate length in characters (code points), inclusive on both ends
    pub fn parse(name: impl Into<String>, min: usize, max: usize) -> Result<Self, Violation> {
        let name = name.into();
        let len = name.chars().count();

        if len == 0 {
            return Err(Violation::Required);
        }
        if len < min {
            return Err(Violation::TooShort { min });
        }
        if len > max {
            return Err(Violation::TooLong { max });
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
