//! Request defaults from TOML (`[defaults]` section)

use docquery_application::QueryDefaults;
use docquery_domain::{
    CitationLevel, ConfigIssue, ConfigIssueCode, DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_THEME_COUNT,
};
use serde::{Deserialize, Serialize};

/// Raw request defaults from TOML
///
/// `citation_level` stays a string here so an unknown value is reported as a
/// config issue rather than a parse failure of the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDefaultsConfig {
    pub enable_themes: bool,
    pub theme_count: u32,
    pub relevance_threshold: f64,
    pub advanced_mode: bool,
    pub citation_level: String,
}

impl Default for FileDefaultsConfig {
    fn default() -> Self {
        Self {
            enable_themes: false,
            theme_count: DEFAULT_THEME_COUNT,
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            advanced_mode: false,
            citation_level: CitationLevel::default().as_str().to_string(),
        }
    }
}

impl FileDefaultsConfig {
    /// Convert to [`QueryDefaults`], collecting every issue found.
    ///
    /// Invalid values fall back to the built-in default so the returned
    /// defaults are always usable.
    pub fn to_query_defaults(&self) -> (QueryDefaults, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut defaults = QueryDefaults::default()
            .with_themes(self.enable_themes)
            .with_relevance_threshold(self.relevance_threshold);
        defaults.advanced_mode = self.advanced_mode;

        if self.theme_count == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "defaults.theme_count".to_string(),
                    value: "0".to_string(),
                },
                "defaults.theme_count must be at least 1",
            ));
        } else {
            defaults = defaults.with_theme_count(self.theme_count);
        }

        if !(0.0..=1.0).contains(&self.relevance_threshold) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "defaults.relevance_threshold".to_string(),
                    value: self.relevance_threshold.to_string(),
                },
                format!(
                    "defaults.relevance_threshold {} is outside [0, 1]",
                    self.relevance_threshold
                ),
            ));
        }

        match self.citation_level.parse::<CitationLevel>() {
            Ok(level) => defaults = defaults.with_citation_level(level),
            Err(_) => issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidEnumValue {
                    field: "defaults.citation_level".to_string(),
                    value: self.citation_level.clone(),
                    valid_values: CitationLevel::all()
                        .iter()
                        .map(|l| l.as_str().to_string())
                        .collect(),
                },
                format!(
                    "defaults.citation_level: unknown value '{}'",
                    self.citation_level
                ),
            )),
        }

        (defaults, issues)
    }
}
