//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised while binding or validating a request, before any collaborator
/// is contacted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Invalid document id: {0} (ids must be positive)")]
    InvalidDocumentId(i64),

    #[error("Invalid theme count: {0} (must be at least 1)")]
    InvalidThemeCount(u32),

    #[error("Invalid relevance threshold: {0}")]
    InvalidThreshold(String),

    #[error("Unknown citation level: {0}")]
    UnknownCitationLevel(String),

    #[error("Illegal run transition: {from} -> {to}")]
    IllegalTransition { from: String, to: String },
}
