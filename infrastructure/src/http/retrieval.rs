//! HTTP retrieval engine adapter

use super::wire::{parse_matches, post_json};
use async_trait::async_trait;
use docquery_application::{RetrievalEngine, RetrievalError, RetrievalQuery};
use docquery_domain::{Match, util::log_preview};
use std::time::Duration;
use tracing::debug;

/// Retrieval engine reached over HTTP
///
/// The [`RetrievalQuery`] is POSTed as-is; `document_ids: null` means the
/// whole corpus.
pub struct HttpRetrievalEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRetrievalEngine {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RetrievalError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RetrievalError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RetrievalEngine for HttpRetrievalEngine {
    async fn process_query(&self, query: &RetrievalQuery) -> Result<Vec<Match>, RetrievalError> {
        debug!(
            "POST {} query='{}'",
            self.endpoint,
            log_preview(&query.query, 100)
        );

        let body = post_json(&self.client, &self.endpoint, query).await?;
        let matches = parse_matches(body)?;

        debug!("Retrieval service returned {} matches", matches.len());
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_server::serve_once;
    use serde_json::json;

    fn query() -> RetrievalQuery {
        RetrievalQuery {
            query: "revenue".to_string(),
            document_ids: None,
            relevance_threshold: 0.7,
            advanced_mode: false,
            citation_level: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_bare_array_response() {
        let (url, request) = serve_once(200, r#"[{"text": "a"}, {"text": "b"}]"#).await;
        let engine = HttpRetrievalEngine::new(url, Duration::from_secs(5)).unwrap();

        let matches = engine.process_query(&query()).await.unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].as_value()["text"], "b");
        let sent = request.await.unwrap();
        assert_eq!(sent["query"], "revenue");
        assert_eq!(sent["document_ids"], json!(null));
        assert_eq!(sent["citation_level"], "paragraph");
    }

    #[tokio::test]
    async fn test_wrapped_response() {
        let (url, _request) = serve_once(200, r#"{"matches": [{"text": "a"}]}"#).await;
        let engine = HttpRetrievalEngine::new(url, Duration::from_secs(5)).unwrap();

        let matches = engine.process_query(&query()).await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].as_value()["text"], "a");
    }

    #[tokio::test]
    async fn test_server_error_is_request_failed() {
        let (url, _request) = serve_once(500, r#"{"detail": "boom"}"#).await;
        let engine = HttpRetrievalEngine::new(url, Duration::from_secs(5)).unwrap();

        let err = engine.process_query(&query()).await.unwrap_err();

        assert!(
            matches!(&err, RetrievalError::RequestFailed(msg) if msg == "HTTP 500 Internal Server Error"),
            "unexpected error: {err}"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        // Port 9 on localhost is discard; nothing listens in test environments
        let engine =
            HttpRetrievalEngine::new("http://127.0.0.1:9/retrieve", Duration::from_secs(2)).unwrap();
        let query = RetrievalQuery {
            query: "x".to_string(),
            document_ids: None,
            relevance_threshold: 0.7,
            advanced_mode: false,
            citation_level: Default::default(),
        };

        let err = engine.process_query(&query).await.unwrap_err();

        assert!(matches!(err, RetrievalError::Connection(_)));
    }
}
