//! Document catalog port
//!
//! Defines how the application layer looks up ingested documents by id.
//! Access goes through a per-request [`CatalogSession`] that is released
//! when dropped, so every exit path of a query run gives the handle back.

use async_trait::async_trait;
use docquery_domain::{DocumentId, DocumentRef};
use thiserror::Error;

/// Errors raised by the catalog infrastructure.
///
/// A document that does not exist is not an error; it is simply absent
/// from the lookup result.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Catalog data is corrupt: {0}")]
    Corrupt(String),

    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of catalog sessions
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait DocumentCatalog: Send + Sync {
    /// Acquire a session for the duration of one query run.
    async fn open(&self) -> Result<Box<dyn CatalogSession>, CatalogError>;
}

/// An open, read-only catalog handle
#[async_trait]
pub trait CatalogSession: Send + Sync {
    /// Return the documents among `ids` that exist.
    ///
    /// Must be idempotent and side-effect free.
    async fn find_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<DocumentRef>, CatalogError>;
}
