//! Error taxonomy for registry and time-series operations
//!
//! Every rejected write surfaces a specific kind so Writers can decide
//! whether to retry, skip, or escalate. Nothing here retries internally.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A row referenced a dimension key that does not exist. Nothing was
    /// written; create the missing dimension row first and retry.
    #[error("referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    /// A value fell outside its declared enumeration or type domain.
    /// Fatal to the single write; correct the input.
    #[error("domain constraint violation: {0}")]
    DomainConstraint(String),

    /// A key already exists and the signal's policy rejects duplicates.
    #[error("conflicting write for existing key: {0}")]
    UpsertConflict(String),

    /// The persistence engine could not be reached. Retry with backoff is
    /// the caller's responsibility.
    #[error("storage engine unavailable")]
    EngineUnavailable(#[source] DbErr),

    /// Any other engine fault.
    #[error("storage engine error")]
    Engine(#[source] DbErr),
}

/// Map an engine error onto the taxonomy.
///
/// Constraint violations carry the constraint name in the message, which is
/// enough for callers; we do not attempt to recover the offending key.
pub(crate) fn classify(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            StoreError::ReferentialIntegrity(msg)
        }
        Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::UpsertConflict(msg),
        _ => match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::EngineUnavailable(err),
            other => StoreError::Engine(other),
        },
    }
}
