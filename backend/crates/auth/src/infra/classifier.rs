//! Store Error Classification
//!
//! Maps raw `sqlx` failures onto the auth error taxonomy. Structured driver
//! information (error variant, SQLSTATE-derived kind, constraint name) is
//! checked first. Message substrings are a fallback for errors that carry
//! nothing structured.

use sqlx::error::{DatabaseError, ErrorKind as DbErrorKind};

use crate::error::AuthError;

/// Classify a store error
pub fn classify(err: &sqlx::Error) -> AuthError {
    match err {
        sqlx::Error::RowNotFound => AuthError::UserNotFound,
        sqlx::Error::Database(db) => classify_database(&**db)
            .unwrap_or_else(|| classify_message(&err.to_string())),
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => AuthError::DatabaseConnection,
        other => classify_message(&other.to_string()),
    }
}

fn classify_database(db: &dyn DatabaseError) -> Option<AuthError> {
    match db.kind() {
        DbErrorKind::UniqueViolation => Some(unique_violation(
            db.constraint().unwrap_or_default(),
            db.message(),
        )),
        DbErrorKind::ForeignKeyViolation => Some(AuthError::ForeignKeyViolation),
        _ => None,
    }
}

/// Which uniqueness rule was hit, by constraint name then by message
fn unique_violation(constraint: &str, message: &str) -> AuthError {
    if constraint.contains("email") || message.contains("email") {
        AuthError::EmailExists
    } else if constraint.contains("username") || message.contains("username") {
        AuthError::UsernameExists
    } else {
        AuthError::UserExists
    }
}

/// Substring fallback over a rendered error message
pub fn classify_message(message: &str) -> AuthError {
    if message == "record not found" || message.contains("no rows") {
        return AuthError::UserNotFound;
    }

    if message.contains("duplicate key") || message.contains("UNIQUE constraint failed") {
        return unique_violation("", message);
    }

    if message.contains("foreign key") || message.contains("FOREIGN KEY constraint failed") {
        return AuthError::ForeignKeyViolation;
    }

    if message.contains("connection refused") || message.contains("no connection") {
        return AuthError::DatabaseConnection;
    }

    AuthError::DatabaseOperation(message.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_fallback() {
        assert!(matches!(classify_message("record not found"), AuthError::UserNotFound));
        assert!(matches!(
            classify_message(r#"duplicate key value violates unique constraint "users_email_key""#),
            AuthError::EmailExists
        ));
        assert!(matches!(
            classify_message("UNIQUE constraint failed: users.username"),
            AuthError::UsernameExists
        ));
        assert!(matches!(
            classify_message("UNIQUE constraint failed: users.id"),
            AuthError::UserExists
        ));
        assert!(matches!(
            classify_message("FOREIGN KEY constraint failed"),
            AuthError::ForeignKeyViolation
        ));
        assert!(matches!(
            classify_message("dial tcp 127.0.0.1:5432: connect: connection refused"),
            AuthError::DatabaseConnection
        ));
    }

    #[test]
    fn test_unknown_message_is_database_operation() {
        let err = classify_message("relation \"users\" does not exist");
        assert!(err.is_database_operation());
        match err {
            AuthError::DatabaseOperation(msg) => assert!(msg.contains("does not exist")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_structured_variants() {
        assert!(matches!(classify(&sqlx::Error::RowNotFound), AuthError::UserNotFound));
        assert!(matches!(classify(&sqlx::Error::PoolTimedOut), AuthError::DatabaseConnection));
        assert!(matches!(classify(&sqlx::Error::PoolClosed), AuthError::DatabaseConnection));

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(classify(&sqlx::Error::Io(io)), AuthError::DatabaseConnection));
    }

    #[test]
    fn test_other_variants_fall_back_to_operation() {
        let err = classify(&sqlx::Error::ColumnNotFound("password".into()));
        assert!(err.is_database_operation());
    }
}
