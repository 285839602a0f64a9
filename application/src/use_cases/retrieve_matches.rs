//! Retrieval delegate.
//!
//! Forwards the query and its tuning parameters to the retrieval engine.
//! Parameters pass through untouched; errors are returned as-is and never
//! retried.

use crate::ports::retrieval_engine::{RetrievalEngine, RetrievalError, RetrievalQuery};
use docquery_domain::util::log_preview;
use docquery_domain::{CitationLevel, Match, QueryText, ResolvedScope};
use std::sync::Arc;
use tracing::{debug, info};

/// Delegates match retrieval to the [`RetrievalEngine`] port
#[derive(Clone)]
pub struct RetrievalDelegate {
    engine: Arc<dyn RetrievalEngine>,
}

impl RetrievalDelegate {
    pub fn new(engine: Arc<dyn RetrievalEngine>) -> Self {
        Self { engine }
    }

    /// Retrieve ranked matches for `query` within `scope`.
    ///
    /// `Unscoped` is sent as no restriction; `Scoped` sends exactly the found
    /// ids. The engine's ordering is preserved.
    pub async fn retrieve(
        &self,
        query: &QueryText,
        scope: &ResolvedScope,
        relevance_threshold: f64,
        advanced_mode: bool,
        citation_level: CitationLevel,
    ) -> Result<Vec<Match>, RetrievalError> {
        let request = RetrievalQuery {
            query: query.as_str().to_string(),
            document_ids: scope.retrieval_filter(),
            relevance_threshold,
            advanced_mode,
            citation_level,
        };

        debug!(
            "Retrieving matches for '{}' (scope: {})",
            log_preview(query.as_str(), 100),
            request
                .document_ids
                .as_ref()
                .map_or_else(|| "all documents".to_string(), |ids| format!("{} documents", ids.len()))
        );

        let matches = self.engine.process_query(&request).await?;
        info!("Retrieved {} matches", matches.len());
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockRetrieval, ids, matches, query};

    #[tokio::test]
    async fn test_unscoped_sends_no_restriction() {
        let engine = Arc::new(MockRetrieval::returning(matches(2)));
        let delegate = RetrievalDelegate::new(engine.clone());

        let result = delegate
            .retrieve(
                &query("liquidity"),
                &ResolvedScope::Unscoped,
                0.7,
                false,
                CitationLevel::Paragraph,
            )
            .await
            .unwrap();

        assert_eq!(result, matches(2));
        let calls = engine.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].document_ids, None);
    }

    #[tokio::test]
    async fn test_scoped_sends_found_ids_only() {
        let engine = Arc::new(MockRetrieval::returning(Vec::new()));
        let delegate = RetrievalDelegate::new(engine.clone());
        let scope = ResolvedScope::partition(&ids(&[3, 1, 999]), ids(&[1, 3]));

        delegate
            .retrieve(&query("x"), &scope, 0.7, false, CitationLevel::Paragraph)
            .await
            .unwrap();

        assert_eq!(engine.calls()[0].document_ids, Some(ids(&[1, 3])));
    }

    #[tokio::test]
    async fn test_parameters_pass_through_unmodified() {
        let engine = Arc::new(MockRetrieval::returning(Vec::new()));
        let delegate = RetrievalDelegate::new(engine.clone());

        delegate
            .retrieve(
                &query("x"),
                &ResolvedScope::Unscoped,
                1.75,
                true,
                CitationLevel::Sentence,
            )
            .await
            .unwrap();

        let call = &engine.calls()[0];
        assert_eq!(call.query, "x");
        assert_eq!(call.relevance_threshold, 1.75);
        assert!(call.advanced_mode);
        assert_eq!(call.citation_level, CitationLevel::Sentence);
    }

    #[tokio::test]
    async fn test_engine_error_is_returned_once() {
        let engine = Arc::new(MockRetrieval::failing("index offline"));
        let delegate = RetrievalDelegate::new(engine.clone());

        let err = delegate
            .retrieve(
                &query("x"),
                &ResolvedScope::Unscoped,
                0.7,
                false,
                CitationLevel::Paragraph,
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Request failed: index offline");
        assert_eq!(engine.calls().len(), 1);
    }
}
