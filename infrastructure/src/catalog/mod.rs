//! Document catalog adapters.
//!
//! - [`JsonDocumentCatalog`] reads the catalog from a JSON file
//! - [`InMemoryDocumentCatalog`] holds a fixed document set
//! - [`UnconfiguredCatalog`] stands in when no catalog is configured; any
//!   scoped query then fails, while unscoped queries never open it

mod in_memory;
mod json_file;

pub use in_memory::InMemoryDocumentCatalog;
pub use json_file::JsonDocumentCatalog;

use async_trait::async_trait;
use docquery_application::ports::document_catalog::{
    CatalogError, CatalogSession, DocumentCatalog,
};

/// Catalog used when `catalog.path` is not set
pub struct UnconfiguredCatalog;

#[async_trait]
impl DocumentCatalog for UnconfiguredCatalog {
    async fn open(&self) -> Result<Box<dyn CatalogSession>, CatalogError> {
        Err(CatalogError::Unavailable(
            "no document catalog configured (set catalog.path)".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_catalog_refuses_sessions() {
        let err = UnconfiguredCatalog.open().await.err().unwrap();
        assert_eq!(
            err.to_string(),
            "Catalog unavailable: no document catalog configured (set catalog.path)"
        );
    }
}
