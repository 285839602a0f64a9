//! Query request value objects

use crate::core::document::DocumentId;
use crate::core::error::DomainError;
use crate::core::query_text::QueryText;
use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_COUNT: u32 = 3;
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.7;

/// Granularity at which retrieved evidence is split and cited.
///
/// Opaque to orchestration: the tag is forwarded to the retrieval engine
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationLevel {
    /// Whole-document citations
    Document,
    /// Paragraph-level citations (default)
    #[default]
    Paragraph,
    /// Sentence-level citations
    Sentence,
}

impl CitationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationLevel::Document => "document",
            CitationLevel::Paragraph => "paragraph",
            CitationLevel::Sentence => "sentence",
        }
    }

    pub fn all() -> &'static [CitationLevel] {
        &[
            CitationLevel::Document,
            CitationLevel::Paragraph,
            CitationLevel::Sentence,
        ]
    }
}

impl std::fmt::Display for CitationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CitationLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "document" | "doc" => Ok(CitationLevel::Document),
            "paragraph" | "para" => Ok(CitationLevel::Paragraph),
            "sentence" => Ok(CitationLevel::Sentence),
            other => Err(DomainError::UnknownCitationLevel(other.to_string())),
        }
    }
}

fn default_theme_count() -> u32 {
    DEFAULT_THEME_COUNT
}

fn default_relevance_threshold() -> f64 {
    DEFAULT_RELEVANCE_THRESHOLD
}

/// A query against the document corpus (Value Object)
///
/// Field names and defaults match the JSON request body accepted by
/// existing callers; a body carrying only `query` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The natural-language query
    pub query: QueryText,
    /// Whether to synthesize themes from the matches
    #[serde(default)]
    pub enable_themes: bool,
    /// Restrict retrieval to these documents (duplicates collapse)
    #[serde(default)]
    pub document_ids: Option<Vec<DocumentId>>,
    /// Number of themes requested from synthesis
    #[serde(default = "default_theme_count")]
    pub theme_count: u32,
    /// Minimum relevance for a match, interpreted by the retrieval engine
    #[serde(default = "default_relevance_threshold")]
    pub relevance_threshold: f64,
    /// Enables the retrieval engine's advanced mode
    #[serde(default)]
    pub advanced_mode: bool,
    /// Citation granularity
    #[serde(default)]
    pub citation_level: CitationLevel,
}

impl QueryRequest {
    /// Create a request with default settings.
    pub fn new(query: QueryText) -> Self {
        Self {
            query,
            enable_themes: false,
            document_ids: None,
            theme_count: DEFAULT_THEME_COUNT,
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            advanced_mode: false,
            citation_level: CitationLevel::default(),
        }
    }

    /// Enable theme synthesis with the given theme count.
    pub fn with_themes(mut self, theme_count: u32) -> Self {
        self.enable_themes = true;
        self.theme_count = theme_count;
        self
    }

    pub fn with_document_ids(mut self, ids: impl IntoIterator<Item = DocumentId>) -> Self {
        self.document_ids = Some(ids.into_iter().collect());
        self
    }

    pub fn with_relevance_threshold(mut self, threshold: f64) -> Self {
        self.relevance_threshold = threshold;
        self
    }

    pub fn with_advanced_mode(mut self, advanced: bool) -> Self {
        self.advanced_mode = advanced;
        self
    }

    pub fn with_citation_level(mut self, level: CitationLevel) -> Self {
        self.citation_level = level;
        self
    }

    /// Requested document ids, or `None` when the request is unscoped.
    ///
    /// An empty list counts as unscoped.
    pub fn requested_document_ids(&self) -> Option<&[DocumentId]> {
        self.document_ids
            .as_deref()
            .filter(|ids| !ids.is_empty())
    }

    /// Check the binding rules that deserialization alone cannot enforce.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.theme_count == 0 {
            return Err(DomainError::InvalidThemeCount(self.theme_count));
        }
        if !self.relevance_threshold.is_finite() {
            return Err(DomainError::InvalidThreshold(
                self.relevance_threshold.to_string(),
            ));
        }
        if let Some(bad) = self
            .document_ids
            .iter()
            .flatten()
            .find(|id| !id.is_valid())
        {
            return Err(DomainError::InvalidDocumentId(bad.get()));
        }
        Ok(())
    }
}
