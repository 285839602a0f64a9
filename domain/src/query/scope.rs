//! Document scope of a query

use crate::core::document::DocumentId;
use std::collections::{BTreeSet, HashSet};

/// The effective document scope of a query.
///
/// `Scoped` always satisfies `found ∪ missing = requested` and
/// `found ∩ missing = ∅`. `missing_ids` keeps the caller's input order
/// without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedScope {
    /// Search the entire corpus
    Unscoped,
    /// Search only the documents that exist in the catalog
    Scoped {
        found_ids: BTreeSet<DocumentId>,
        missing_ids: Vec<DocumentId>,
    },
}

impl ResolvedScope {
    /// Partition `requested` into found and missing ids, given the ids the
    /// catalog reported as existing.
    ///
    /// Catalog ids that were never requested are ignored.
    pub fn partition(
        requested: &[DocumentId],
        existing: impl IntoIterator<Item = DocumentId>,
    ) -> Self {
        let requested_set: HashSet<DocumentId> = requested.iter().copied().collect();
        let found_ids: BTreeSet<DocumentId> = existing
            .into_iter()
            .filter(|id| requested_set.contains(id))
            .collect();

        let mut seen = HashSet::new();
        let missing_ids = requested
            .iter()
            .copied()
            .filter(|id| !found_ids.contains(id) && seen.insert(*id))
            .collect();

        ResolvedScope::Scoped {
            found_ids,
            missing_ids,
        }
    }

    pub fn is_scoped(&self) -> bool {
        matches!(self, ResolvedScope::Scoped { .. })
    }

    /// The id restriction handed to the retrieval engine.
    ///
    /// `None` means "no restriction". A scope whose requested documents are
    /// all missing yields `Some(vec![])` rather than widening to the corpus.
    pub fn retrieval_filter(&self) -> Option<Vec<DocumentId>> {
        match self {
            ResolvedScope::Unscoped => None,
            ResolvedScope::Scoped { found_ids, .. } => Some(found_ids.iter().copied().collect()),
        }
    }

    /// Number of documents the query is restricted to, `None` when unscoped.
    pub fn selected_document_count(&self) -> Option<usize> {
        match self {
            ResolvedScope::Unscoped => None,
            ResolvedScope::Scoped { found_ids, .. } => Some(found_ids.len()),
        }
    }

    pub fn missing_ids(&self) -> &[DocumentId] {
        match self {
            ResolvedScope::Unscoped => &[],
            ResolvedScope::Scoped { missing_ids, .. } => missing_ids,
        }
    }
}
