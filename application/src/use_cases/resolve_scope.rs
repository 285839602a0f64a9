//! Document scope resolution.
//!
//! Turns the optional list of requested document ids into a
//! [`ResolvedScope`]. Missing documents are advisory: they are logged and the
//! run continues with whatever was found.

use crate::ports::document_catalog::{CatalogError, DocumentCatalog};
use docquery_domain::util::join_display;
use docquery_domain::{DocumentId, ResolvedScope};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves requested document ids against the catalog
#[derive(Clone)]
pub struct ScopeResolver {
    catalog: Arc<dyn DocumentCatalog>,
}

impl ScopeResolver {
    pub fn new(catalog: Arc<dyn DocumentCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolve `requested` into a scope.
    ///
    /// `None` or an empty list is `Unscoped` and never touches the catalog.
    /// Otherwise one catalog session is opened, queried once with the
    /// deduplicated ids and released before returning, including on error.
    pub async fn resolve(
        &self,
        requested: Option<&[DocumentId]>,
    ) -> Result<ResolvedScope, CatalogError> {
        let Some(requested) = requested.filter(|ids| !ids.is_empty()) else {
            debug!("No document scope requested; searching the whole corpus");
            return Ok(ResolvedScope::Unscoped);
        };

        let mut seen = HashSet::new();
        let unique: Vec<DocumentId> = requested
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let existing = {
            let session = self.catalog.open().await?;
            session.find_by_ids(&unique).await?
        };

        let scope = ResolvedScope::partition(requested, existing.into_iter().map(|doc| doc.id));

        if !scope.missing_ids().is_empty() {
            warn!(
                "Some document IDs not found: [{}]",
                join_display(scope.missing_ids())
            );
        }
        if let Some(filter) = scope.retrieval_filter() {
            debug!("Selected document IDs: [{}]", join_display(&filter));
        }

        Ok(scope)
    }
}
