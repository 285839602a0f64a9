//! External service configuration from TOML (`[retrieval]` and `[themes]`)
//!
//! ```toml
//! [retrieval]
//! endpoint = "http://127.0.0.1:8000/retrieve"
//! timeout_secs = 60
//!
//! [themes]
//! endpoint = "http://127.0.0.1:8000/themes"
//! ```

use docquery_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_RETRIEVAL_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_THEMES_TIMEOUT_SECS: u64 = 120;

/// Raw configuration of one HTTP backed subsystem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Endpoint URL the adapter POSTs to
    pub endpoint: Option<String>,
    /// Client timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl FileServiceConfig {
    /// Endpoint, with blank values treated as unset
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    pub fn timeout(&self, default_secs: u64) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(default_secs))
    }

    /// Report a missing endpoint for `section` with the given severity.
    pub fn check_endpoint(&self, section: &str, required: bool) -> Vec<ConfigIssue> {
        if self.endpoint().is_some() {
            return Vec::new();
        }
        let code = ConfigIssueCode::MissingValue {
            field: format!("{}.endpoint", section),
        };
        if required {
            vec![ConfigIssue::error(
                code,
                format!("{}.endpoint is not set", section),
            )]
        } else {
            vec![ConfigIssue::warning(
                code,
                format!(
                    "{}.endpoint is not set; theme synthesis will report no themes",
                    section
                ),
            )]
        }
    }
}
