//! Field Rule Violations
//!
//! A single failed rule on a single input field. Rendered with the
//! user-facing messages used in validation responses.

use std::fmt;

/// Why a field value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Missing or empty
    Required,
    /// Fewer than `min` characters
    TooShort { min: usize },
    /// More than `max` characters
    TooLong { max: usize },
    /// Not an email address
    InvalidEmail,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => f.write_str("Este campo es obligatorio"),
            Violation::TooShort { min } => write!(f, "Debe tener al menos {min} caracteres"),
            Violation::TooLong { max } => write!(f, "No puede tener más de {max} caracteres"),
            Violation::InvalidEmail => f.write_str("Debe ser un email válido"),
        }
    }
}
