//! Document catalog configuration from TOML (`[catalog]` section)

use docquery_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Path to the JSON catalog file
    pub path: Option<PathBuf>,
}

impl FileCatalogConfig {
    /// Configured catalog path, reporting a warning when unset.
    ///
    /// Unscoped queries never touch the catalog, so a missing path only
    /// fails once a request names document IDs.
    pub fn resolve_path(&self) -> (Option<PathBuf>, Vec<ConfigIssue>) {
        match &self.path {
            Some(path) if !path.as_os_str().is_empty() => (Some(path.clone()), Vec::new()),
            _ => (
                None,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::MissingValue {
                        field: "catalog.path".to_string(),
                    },
                    "catalog.path is not set; queries restricted to document IDs will fail",
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_is_warning() {
        let (path, issues) = FileCatalogConfig::default().resolve_path();
        assert!(path.is_none());
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_configured_path() {
        let config = FileCatalogConfig {
            path: Some(PathBuf::from("documents.json")),
        };
        let (path, issues) = config.resolve_path();
        assert_eq!(path, Some(PathBuf::from("documents.json")));
        assert!(issues.is_empty());
    }
}
