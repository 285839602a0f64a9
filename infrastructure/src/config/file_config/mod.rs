//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod defaults;
mod logging;
mod output;
mod services;

pub use catalog::FileCatalogConfig;
pub use defaults::FileDefaultsConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use services::{DEFAULT_RETRIEVAL_TIMEOUT_SECS, DEFAULT_THEMES_TIMEOUT_SECS, FileServiceConfig};

use docquery_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Document catalog location
    pub catalog: FileCatalogConfig,
    /// Retrieval engine endpoint
    pub retrieval: FileServiceConfig,
    /// Theme synthesizer endpoint
    pub themes: FileServiceConfig,
    /// Request defaults
    pub defaults: FileDefaultsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Audit log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.catalog.resolve_path().1);
        issues.extend(self.retrieval.check_endpoint("retrieval", true));
        issues.extend(self.themes.check_endpoint("themes", false));
        issues.extend(self.defaults.to_query_defaults().1);

        issues
    }
}
