//! HTTP theme synthesizer adapter

use super::wire::{ThemeRequestBody, parse_themes, post_json};
use async_trait::async_trait;
use docquery_application::{SynthesisError, ThemeSynthesizer};
use docquery_domain::{Match, Theme};
use std::time::Duration;
use tracing::debug;

/// Theme synthesizer reached over HTTP
pub struct HttpThemeSynthesizer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpThemeSynthesizer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SynthesisError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SynthesisError::Other(format!("Failed to build HTTP client: {}", e)))?;
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
impl ThemeSynthesizer for HttpThemeSynthesizer {
    async fn identify_themes(
        &self,
        matches: &[Match],
        theme_count: u32,
    ) -> Result<Vec<Theme>, SynthesisError> {
        debug!(
            "POST {} ({} matches, theme_count={})",
            self.endpoint,
            matches.len(),
            theme_count
        );

        let body = ThemeRequestBody {
            matches,
            theme_count,
        };
        let response = post_json(&self.client, &self.endpoint, &body).await?;
        Ok(parse_themes(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_server::serve_once;
    use serde_json::json;

    #[tokio::test]
    async fn test_wrapped_themes_response() {
        let (url, request) = serve_once(200, r#"{"themes": [{"label": "pricing"}]}"#).await;
        let synthesizer = HttpThemeSynthesizer::new(url, Duration::from_secs(5)).unwrap();

        let themes = synthesizer
            .identify_themes(&[Match::new(json!({"text": "a"}))], 2)
            .await
            .unwrap();

        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].as_value()["label"], "pricing");
        let sent = request.await.unwrap();
        assert_eq!(sent["theme_count"], 2);
        assert_eq!(sent["matches"], json!([{"text": "a"}]));
    }

    #[tokio::test]
    async fn test_non_list_themes_response_is_invalid() {
        let (url, _request) = serve_once(200, r#"{"label": "pricing"}"#).await;
        let synthesizer = HttpThemeSynthesizer::new(url, Duration::from_secs(5)).unwrap();

        let err = synthesizer
            .identify_themes(&[Match::new(json!({"text": "a"}))], 2)
            .await
            .unwrap_err();

        assert!(matches!(err, SynthesisError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_reported() {
        let synthesizer =
            HttpThemeSynthesizer::new("http://127.0.0.1:9/themes", Duration::from_secs(2)).unwrap();

        let err = synthesizer
            .identify_themes(&[Match::new(json!({"text": "a"}))], 3)
            .await
            .unwrap_err();

        assert!(matches!(err, SynthesisError::Connection(_)));
        assert!(!err.to_string().is_empty());
    }
}
