//! Response assembly.

use docquery_domain::{Match, QueryRequest, QueryResult, QuerySettings, ResolvedScope, Theme};

/// Combine the pipeline outputs into one [`QueryResult`].
///
/// Pure; `themes` has already been collapsed from the theme outcome, so no
/// failure information reaches this point.
pub fn assemble_response(
    request: &QueryRequest,
    scope: &ResolvedScope,
    matches: Vec<Match>,
    themes: Option<Vec<Theme>>,
) -> QueryResult {
    QueryResult::new(
        request.query.as_str(),
        matches,
        themes,
        QuerySettings::new(request, scope),
    )
}
