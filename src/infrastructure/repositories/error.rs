use crate::domain::errors::DomainError;
use std::fmt;

/// Wrap a sqlx failure as `Internal`, prefixed with `context`.
///
/// Constraint names and SQLSTATE codes are kept in the message so that a
/// foreign key violation stays diagnosable without being reclassified.
pub fn map_sqlx(err: sqlx::Error, context: impl fmt::Display) -> DomainError {
    tracing::error!(error = %err, "{context}");

    match &err {
        sqlx::Error::Database(db_err) => {
            let mut message = format!("{context}: {}", db_err.message());
            if let Some(code) = db_err.code() {
                message.push_str(&format!(" (sqlstate {code})"));
            }
            if let Some(constraint) = db_err.constraint() {
                message.push_str(&format!(" [constraint {constraint}]"));
            }
            DomainError::Internal(message)
        }
        _ => DomainError::Internal(format!("{context}: {err}")),
    }
}
