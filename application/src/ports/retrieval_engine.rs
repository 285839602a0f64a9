//! Retrieval engine port
//!
//! Defines the interface to the subsystem that turns a query into ranked
//! matches. How it ranks (embeddings, vector indexes, citation splitting) is
//! its own business.

use async_trait::async_trait;
use docquery_domain::{CitationLevel, DocumentId, Match};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during retrieval
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Parameters handed to the retrieval engine.
///
/// `document_ids: None` means "no restriction"; `Some` lists exactly the
/// documents to search. Serializes as the engine's request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalQuery {
    pub query: String,
    pub document_ids: Option<Vec<DocumentId>>,
    pub relevance_threshold: f64,
    pub advanced_mode: bool,
    pub citation_level: CitationLevel,
}

/// Gateway to the retrieval subsystem
///
/// Must fail loudly rather than return degraded results.
#[async_trait]
pub trait RetrievalEngine: Send + Sync {
    async fn process_query(&self, query: &RetrievalQuery) -> Result<Vec<Match>, RetrievalError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(document_ids: Option<Vec<DocumentId>>) -> RetrievalQuery {
        RetrievalQuery {
            query: "x".to_string(),
            document_ids,
            relevance_threshold: 0.7,
            advanced_mode: false,
            citation_level: CitationLevel::Paragraph,
        }
    }

    #[test]
    fn test_unscoped_body_sends_null_ids() {
        assert_eq!(
            serde_json::to_value(query(None)).unwrap(),
            json!({
                "query": "x",
                "document_ids": null,
                "relevance_threshold": 0.7,
                "advanced_mode": false,
                "citation_level": "paragraph"
            })
        );
    }

    #[test]
    fn test_all_missing_scope_sends_empty_ids() {
        let body = serde_json::to_value(query(Some(Vec::new()))).unwrap();
        assert_eq!(body["document_ids"], json!([]));
    }

    #[test]
    fn test_scoped_body_sends_plain_integers() {
        let ids = vec![DocumentId::try_new(1).unwrap(), DocumentId::try_new(2).unwrap()];
        let body = serde_json::to_value(query(Some(ids))).unwrap();
        assert_eq!(body["document_ids"], json!([1, 2]));
    }
}
