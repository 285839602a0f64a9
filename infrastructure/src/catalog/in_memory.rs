//! In-memory document catalog.

use async_trait::async_trait;
use docquery_application::ports::document_catalog::{
    CatalogError, CatalogSession, DocumentCatalog,
};
use docquery_domain::{DocumentId, DocumentRef};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Catalog over a fixed set of documents
///
/// Sessions share the document map, so opening one is cheap.
#[derive(Clone, Default)]
pub struct InMemoryDocumentCatalog {
    documents: Arc<BTreeMap<DocumentId, DocumentRef>>,
}

impl InMemoryDocumentCatalog {
    pub fn new(documents: impl IntoIterator<Item = DocumentRef>) -> Self {
        Self {
            documents: Arc::new(documents.into_iter().map(|d| (d.id, d)).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentCatalog for InMemoryDocumentCatalog {
    async fn open(&self) -> Result<Box<dyn CatalogSession>, CatalogError> {
        Ok(Box::new(InMemorySession {
            documents: Arc::clone(&self.documents),
        }))
    }
}

struct InMemorySession {
    documents: Arc<BTreeMap<DocumentId, DocumentRef>>,
}

#[async_trait]
impl CatalogSession for InMemorySession {
    async fn find_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<DocumentRef>, CatalogError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.documents.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: i64) -> DocumentRef {
        DocumentRef::new(DocumentId::try_new(id).unwrap())
    }

    #[tokio::test]
    async fn test_find_by_ids() {
        let catalog = InMemoryDocumentCatalog::new([doc(1), doc(2)]);
        let session = catalog.open().await.unwrap();

        let requested = [
            DocumentId::try_new(2).unwrap(),
            DocumentId::try_new(5).unwrap(),
        ];
        let found = session.find_by_ids(&requested).await.unwrap();

        assert_eq!(found, vec![doc(2)]);
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_catalog_finds_nothing() {
        let catalog = InMemoryDocumentCatalog::default();
        let session = catalog.open().await.unwrap();

        let found = session
            .find_by_ids(&[DocumentId::try_new(1).unwrap()])
            .await
            .unwrap();

        assert!(found.is_empty());
        assert!(catalog.is_empty());
    }
}
