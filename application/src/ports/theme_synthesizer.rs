//! Theme synthesis port

use async_trait::async_trait;
use docquery_domain::{Match, Theme};
use thiserror::Error;

/// Errors that can occur during theme synthesis
///
/// Every variant carries a human-readable description; the theme stage
/// reports it and carries on.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Clusters and labels a set of matches into themes
#[async_trait]
pub trait ThemeSynthesizer: Send + Sync {
    async fn identify_themes(
        &self,
        matches: &[Match],
        theme_count: u32,
    ) -> Result<Vec<Theme>, SynthesisError>;
}
