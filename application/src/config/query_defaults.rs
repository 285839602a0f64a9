//! Query defaults: request parameters supplied by configuration.
//!
//! [`QueryDefaults`] fills in whatever a caller did not specify when a
//! [`QueryRequest`] is bound. Its own defaults are the wire defaults of the
//! request body, so an empty configuration changes nothing.

use docquery_domain::{
    CitationLevel, DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_THEME_COUNT, QueryRequest,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default request parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDefaults {
    pub enable_themes: bool,
    pub theme_count: u32,
    pub relevance_threshold: f64,
    pub advanced_mode: bool,
    pub citation_level: CitationLevel,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            enable_themes: false,
            theme_count: DEFAULT_THEME_COUNT,
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            advanced_mode: false,
            citation_level: CitationLevel::default(),
        }
    }
}

impl QueryDefaults {
    // ==================== Builder Methods ====================

    pub fn with_themes(mut self, enable: bool) -> Self {
        self.enable_themes = enable;
        self
    }

    pub fn with_theme_count(mut self, count: u32) -> Self {
        self.theme_count = count;
        self
    }

    pub fn with_relevance_threshold(mut self, threshold: f64) -> Self {
        self.relevance_threshold = threshold;
        self
    }

    pub fn with_citation_level(mut self, level: CitationLevel) -> Self {
        self.citation_level = level;
        self
    }

    /// Bind a JSON request body, filling absent keys from these defaults.
    ///
    /// Keys the request body does not know are ignored.
    pub fn bind_body(&self, body: Map<String, Value>) -> Result<QueryRequest, serde_json::Error> {
        let mut merged = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        merged.extend(body);
        serde_json::from_value(Value::Object(merged))
    }
}
