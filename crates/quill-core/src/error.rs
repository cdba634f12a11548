//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
///
/// The only business failure this service knows is a lookup that came back
/// empty; the variant keeps the requested identifier so the error response
/// can name it.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },
}

/// Repository-level errors.
///
/// "Row absent" is not an error at this layer: lookups return `Option` and
/// deletes/updates report affected rows, leaving the not-found decision to
/// the caller.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
