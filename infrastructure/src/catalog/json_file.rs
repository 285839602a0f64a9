//! JSON file document catalog.
//!
//! The catalog file is read once per session, so each query run sees a
//! consistent snapshot. Accepted layouts:
//!
//! ```json
//! [{"id": 1, "title": "Q3 report"}, {"id": 2}]
//! ```
//!
//! or the same list under a `documents` key.

use async_trait::async_trait;
use docquery_application::ports::document_catalog::{
    CatalogError, CatalogSession, DocumentCatalog,
};
use docquery_domain::{DocumentId, DocumentRef};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<DocumentRef>),
    Wrapped { documents: Vec<DocumentRef> },
}

impl CatalogFile {
    fn into_documents(self) -> Vec<DocumentRef> {
        match self {
            CatalogFile::List(documents) | CatalogFile::Wrapped { documents } => documents,
        }
    }
}

/// Document catalog backed by a JSON file
pub struct JsonDocumentCatalog {
    path: PathBuf,
}

impl JsonDocumentCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentCatalog for JsonDocumentCatalog {
    async fn open(&self) -> Result<Box<dyn CatalogSession>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::Unavailable(format!(
                "catalog file {} not found",
                self.path.display()
            )),
            _ => CatalogError::Io(e),
        })?;

        let file: CatalogFile = serde_json::from_slice(&bytes).map_err(|e| {
            CatalogError::Corrupt(format!("{}: {}", self.path.display(), e))
        })?;

        let documents: HashMap<DocumentId, DocumentRef> = file
            .into_documents()
            .into_iter()
            .map(|doc| (doc.id, doc))
            .collect();

        debug!(
            "Opened catalog session on {} ({} documents)",
            self.path.display(),
            documents.len()
        );

        Ok(Box::new(JsonCatalogSession {
            path: self.path.clone(),
            documents,
        }))
    }
}

/// Snapshot of the catalog file taken when the session was opened
struct JsonCatalogSession {
    path: PathBuf,
    documents: HashMap<DocumentId, DocumentRef>,
}

#[async_trait]
impl CatalogSession for JsonCatalogSession {
    async fn find_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<DocumentRef>, CatalogError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.documents.get(id).cloned())
            .collect())
    }
}

impl Drop for JsonCatalogSession {
    fn drop(&mut self) {
        debug!("Released catalog session on {}", self.path.display());
    }
}
