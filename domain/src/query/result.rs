//! Query result value objects.
//!
//! These types describe what a caller receives from one query run:
//! - [`QuerySettings`] - normalized echo of the effective request parameters
//! - [`ThemeOutcome`] - what happened in the optional theme stage
//! - [`QueryResult`] - matches, themes and settings in one response
//!
//! Optional fields serialize as explicit `null`, never omitted, to keep the
//! response shape stable for existing callers.

use super::evidence::{Match, Theme};
use super::request::{CitationLevel, QueryRequest};
use super::scope::ResolvedScope;
use serde::{Deserialize, Serialize};

/// Normalized echo of the effective request parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySettings {
    pub enable_themes: bool,
    /// `None` when themes are disabled, whatever count was supplied
    pub theme_count: Option<u32>,
    pub relevance_threshold: f64,
    pub advanced_mode: bool,
    pub citation_level: CitationLevel,
    /// `None` when the query is unscoped
    pub selected_document_count: Option<usize>,
}

impl QuerySettings {
    pub fn new(request: &QueryRequest, scope: &ResolvedScope) -> Self {
        Self {
            enable_themes: request.enable_themes,
            theme_count: request.enable_themes.then_some(request.theme_count),
            relevance_threshold: request.relevance_threshold,
            advanced_mode: request.advanced_mode,
            citation_level: request.citation_level,
            selected_document_count: scope.selected_document_count(),
        }
    }
}

/// Outcome of the theme stage.
///
/// `Failed` is kept apart from `Computed` for observability only;
/// [`into_themes`](Self::into_themes) collapses it to an empty list so the
/// response looks the same as "synthesis ran and found nothing".
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeOutcome {
    /// Themes were disabled or there were no matches to synthesize from
    NotComputed,
    /// Synthesis succeeded (possibly with zero themes)
    Computed(Vec<Theme>),
    /// Synthesis raised; the reason is reported but not returned to callers
    Failed { reason: String },
}

impl ThemeOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ThemeOutcome::Failed { .. })
    }

    /// Collapse into the response shape: `None` for not computed, an empty
    /// list for failures.
    pub fn into_themes(self) -> Option<Vec<Theme>> {
        match self {
            ThemeOutcome::NotComputed => None,
            ThemeOutcome::Computed(themes) => Some(themes),
            ThemeOutcome::Failed { .. } => Some(Vec::new()),
        }
    }
}

/// Complete result of one query run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The query text, echoed
    pub query: String,
    /// Matches in the order the retrieval engine ranked them
    pub matches: Vec<Match>,
    /// `None` when themes were not computed; `Some(vec![])` when computed
    /// but empty
    pub themes: Option<Vec<Theme>>,
    pub settings: QuerySettings,
}

impl QueryResult {
    pub fn new(
        query: impl Into<String>,
        matches: Vec<Match>,
        themes: Option<Vec<Theme>>,
        settings: QuerySettings,
    ) -> Self {
        Self {
            query: query.into(),
            matches,
            themes,
            settings,
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Number of themes, `None` when themes were not computed.
    pub fn theme_count(&self) -> Option<usize> {
        self.themes.as_ref().map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::DocumentId;
    use crate::core::query_text::QueryText;
    use serde_json::json;

    fn request() -> QueryRequest {
        QueryRequest::new(QueryText::try_new("margins").unwrap())
    }

    #[test]
    fn test_settings_hide_theme_count_when_disabled() {
        let mut request = request();
        request.theme_count = 5;
        let settings = QuerySettings::new(&request, &ResolvedScope::Unscoped);
        assert_eq!(settings.theme_count, None);
        assert_eq!(settings.selected_document_count, None);
    }

    #[test]
    fn test_settings_echo_theme_count_and_scope_size() {
        let request = request().with_themes(5);
        let found = [DocumentId::try_new(1).unwrap(), DocumentId::try_new(2).unwrap()];
        let scope = ResolvedScope::partition(&found, found);
        let settings = QuerySettings::new(&request, &scope);
        assert_eq!(settings.theme_count, Some(5));
        assert_eq!(settings.selected_document_count, Some(2));
    }

    #[test]
    fn test_theme_outcome_collapse() {
        assert_eq!(ThemeOutcome::NotComputed.into_themes(), None);
        assert_eq!(ThemeOutcome::Computed(vec![]).into_themes(), Some(vec![]));
        let failed = ThemeOutcome::Failed {
            reason: "boom".to_string(),
        };
        assert!(failed.is_failed());
        assert_eq!(failed.into_themes(), Some(vec![]));
    }

    #[test]
    fn test_result_serializes_explicit_nulls() {
        let request = request();
        let settings = QuerySettings::new(&request, &ResolvedScope::Unscoped);
        let result = QueryResult::new("margins", vec![], None, settings);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "query": "margins",
                "matches": [],
                "themes": null,
                "settings": {
                    "enable_themes": false,
                    "theme_count": null,
                    "relevance_threshold": 0.7,
                    "advanced_mode": false,
                    "citation_level": "paragraph",
                    "selected_document_count": null
                }
            })
        );
    }
}
