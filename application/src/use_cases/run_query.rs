//! Run Query use case
//!
//! Orchestrates one query run:
//!
//! 1. Resolve the document scope against the catalog
//! 2. Retrieve ranked matches
//! 3. Optionally synthesize themes (failures are contained)
//! 4. Assemble the response
//!
//! Scope and retrieval failures end the run. They are all reported to the
//! caller in one shape, [`RunQueryError`], which carries a description but
//! not the stage that failed.

use crate::ports::document_catalog::{CatalogError, DocumentCatalog};
use crate::ports::progress::{NoQueryProgress, QueryProgressNotifier};
use crate::ports::query_logger::{NoQueryLogger, QueryEvent, QueryLogger};
use crate::ports::retrieval_engine::{RetrievalEngine, RetrievalError};
use crate::ports::theme_synthesizer::ThemeSynthesizer;
use crate::use_cases::assemble_response::assemble_response;
use crate::use_cases::resolve_scope::ScopeResolver;
use crate::use_cases::retrieve_matches::RetrievalDelegate;
use crate::use_cases::synthesize_themes::ThemeDelegate;
use docquery_domain::util::log_preview;
use docquery_domain::{QueryRequest, QueryResult, QueryRun, RunState, Stage, ThemeOutcome};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// The single failure shape of a query run
#[derive(Error, Debug)]
#[error("query processing failed: {description}")]
pub struct RunQueryError {
    description: String,
}

impl RunQueryError {
    /// Description of the underlying error
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Errors from the stages that can end a run
#[derive(Error, Debug)]
enum StageError {
    #[error(transparent)]
    Scope(#[from] CatalogError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

impl StageError {
    fn stage(&self) -> Stage {
        match self {
            StageError::Scope(_) => Stage::ScopeResolution,
            StageError::Retrieval(_) => Stage::Retrieval,
        }
    }
}

impl From<StageError> for RunQueryError {
    fn from(err: StageError) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

/// Use case for answering a query against the document corpus
///
/// Holds only shared port handles, so one instance can serve many
/// concurrent runs.
#[derive(Clone)]
pub struct RunQueryUseCase {
    scope_resolver: ScopeResolver,
    retrieval: RetrievalDelegate,
    themes: ThemeDelegate,
    query_logger: Arc<dyn QueryLogger>,
}

impl RunQueryUseCase {
    pub fn new(
        catalog: Arc<dyn DocumentCatalog>,
        retrieval_engine: Arc<dyn RetrievalEngine>,
        theme_synthesizer: Arc<dyn ThemeSynthesizer>,
    ) -> Self {
        Self {
            scope_resolver: ScopeResolver::new(catalog),
            retrieval: RetrievalDelegate::new(retrieval_engine),
            themes: ThemeDelegate::new(theme_synthesizer),
            query_logger: Arc::new(NoQueryLogger),
        }
    }

    /// Create with a query audit logger.
    pub fn with_query_logger(mut self, logger: Arc<dyn QueryLogger>) -> Self {
        self.query_logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, request: QueryRequest) -> Result<QueryResult, RunQueryError> {
        self.execute_with_progress(request, &NoQueryProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: QueryRequest,
        progress: &dyn QueryProgressNotifier,
    ) -> Result<QueryResult, RunQueryError> {
        info!("Processing query: '{}'", log_preview(request.query.as_str(), 100));
        info!(
            "Parameters: enable_themes={}, theme_count={}, relevance_threshold={}, advanced_mode={}, citation_level={}",
            request.enable_themes,
            request.theme_count,
            request.relevance_threshold,
            request.advanced_mode,
            request.citation_level
        );
        self.query_logger.log(QueryEvent::new(
            "query_started",
            json!({
                "query": request.query.as_str(),
                "enable_themes": request.enable_themes,
                "theme_count": request.theme_count,
                "relevance_threshold": request.relevance_threshold,
                "advanced_mode": request.advanced_mode,
                "citation_level": request.citation_level,
                "document_ids": request.document_ids,
            }),
        ));

        let mut run = QueryRun::new();
        match self.run_pipeline(&request, &mut run, progress).await {
            Ok(result) => {
                self.query_logger.log(QueryEvent::new(
                    "query_completed",
                    json!({
                        "query": result.query,
                        "match_count": result.match_count(),
                        "theme_count": result.theme_count(),
                        "selected_document_count": result.settings.selected_document_count,
                    }),
                ));
                Ok(result)
            }
            Err(err) => {
                let stage = err.stage();
                progress.on_stage_complete(stage, false);
                if let Err(e) = run.fail(stage) {
                    warn!("Run state not updated on failure: {}", e);
                }
                error!("Error processing query during {}: {}", stage, err);
                self.query_logger.log(QueryEvent::new(
                    "query_failed",
                    json!({
                        "query": request.query.as_str(),
                        "stage": stage.as_str(),
                        "error": err.to_string(),
                    }),
                ));
                Err(err.into())
            }
        }
    }

    async fn run_pipeline(
        &self,
        request: &QueryRequest,
        run: &mut QueryRun,
        progress: &dyn QueryProgressNotifier,
    ) -> Result<QueryResult, StageError> {
        // Stage 1: scope
        progress.on_stage_start(Stage::ScopeResolution);
        let scope = self
            .scope_resolver
            .resolve(request.requested_document_ids())
            .await?;
        if !scope.missing_ids().is_empty() {
            progress.on_documents_missing(scope.missing_ids());
            self.query_logger.log(QueryEvent::new(
                "documents_missing",
                json!({ "missing_ids": scope.missing_ids() }),
            ));
        }
        progress.on_stage_complete(Stage::ScopeResolution, true);
        Self::advance(run, RunState::ScopeResolved);

        // Stage 2: retrieval
        progress.on_stage_start(Stage::Retrieval);
        let matches = self
            .retrieval
            .retrieve(
                &request.query,
                &scope,
                request.relevance_threshold,
                request.advanced_mode,
                request.citation_level,
            )
            .await?;
        progress.on_stage_complete(Stage::Retrieval, true);
        Self::advance(run, RunState::Retrieved);

        // Stage 3: themes (never fatal)
        let will_synthesize = request.enable_themes && !matches.is_empty();
        if will_synthesize {
            progress.on_stage_start(Stage::ThemeSynthesis);
        } else {
            let reason = if request.enable_themes {
                "no matches to synthesize from"
            } else {
                "themes not requested"
            };
            progress.on_stage_skipped(Stage::ThemeSynthesis, reason);
        }
        let outcome = self
            .themes
            .maybe_synthesize(request.enable_themes, &matches, request.theme_count)
            .await;
        if let ThemeOutcome::Failed { reason } = &outcome {
            progress.on_themes_failed(reason);
            self.query_logger.log(QueryEvent::new(
                "themes_failed",
                json!({ "query": request.query.as_str(), "error": reason }),
            ));
        }
        if will_synthesize {
            progress.on_stage_complete(Stage::ThemeSynthesis, !outcome.is_failed());
        }
        Self::advance(run, RunState::ThemesResolved);

        // Stage 4: assembly
        progress.on_stage_start(Stage::Assembly);
        let result = assemble_response(request, &scope, matches, outcome.into_themes());
        progress.on_stage_complete(Stage::Assembly, true);
        Self::advance(run, RunState::Assembled);

        info!(
            "Query complete: {} matches, themes: {}",
            result.match_count(),
            result
                .theme_count()
                .map_or_else(|| "not computed".to_string(), |n| n.to_string())
        );
        Ok(result)
    }

    fn advance(run: &mut QueryRun, next: RunState) {
        if let Err(e) = run.advance(next) {
            warn!("Run state not advanced: {}", e);
        }
    }
}
