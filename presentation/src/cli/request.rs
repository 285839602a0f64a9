//! Request binding.
//!
//! A [`QueryRequest`] is built in three layers: configured defaults, then an
//! optional JSON request file, then command line flags. The file is bound
//! with the same rules as any request body, so unknown keys are ignored. The
//! bound request is validated before it is handed to the pipeline.

use crate::cli::commands::Cli;
use docquery_application::QueryDefaults;
use docquery_domain::{CitationLevel, DocumentId, DomainError, QueryRequest, QueryText};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while binding a request
#[derive(Error, Debug)]
pub enum RequestBindError {
    #[error("Could not read request file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("No query given (pass QUERY or --request)")]
    MissingQuery,

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Request body as read from a file: a JSON object bound later
#[derive(Debug, Default)]
pub struct RequestFile(Map<String, Value>);

impl RequestFile {
    /// Read a request body from `path`, or from stdin when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self, RequestBindError> {
        let read_error = |source| RequestBindError::Read {
            path: path.display().to_string(),
            source,
        };

        let content = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(read_error)?;
            buf
        } else {
            std::fs::read_to_string(path).map_err(read_error)?
        };

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, RequestBindError> {
        Ok(Self(serde_json::from_str(content)?))
    }
}

/// Bind a request from defaults, an optional request file and CLI flags.
pub fn bind_request(
    cli: &Cli,
    file: Option<RequestFile>,
    defaults: &QueryDefaults,
) -> Result<QueryRequest, RequestBindError> {
    let mut body = file.unwrap_or_default().0;

    if let Some(text) = &cli.query {
        let text = QueryText::try_new(text.as_str())?;
        body.insert("query".to_string(), Value::String(text.into()));
    }
    if !body.contains_key("query") {
        return Err(RequestBindError::MissingQuery);
    }

    let mut request = defaults.bind_body(body)?;

    // Command line flags
    if cli.themes {
        request.enable_themes = true;
    }
    if cli.no_themes {
        request.enable_themes = false;
    }
    if let Some(count) = cli.theme_count {
        request.theme_count = count;
    }
    if let Some(threshold) = cli.threshold {
        request.relevance_threshold = threshold;
    }
    if cli.advanced {
        request.advanced_mode = true;
    }
    if cli.no_advanced {
        request.advanced_mode = false;
    }
    if let Some(level) = &cli.citation_level {
        request.citation_level = level.parse::<CitationLevel>()?;
    }
    if !cli.document_ids.is_empty() {
        request.document_ids = Some(parse_ids(&cli.document_ids)?);
    }

    request.validate()?;
    Ok(request)
}

fn parse_ids(raw: &[i64]) -> Result<Vec<DocumentId>, DomainError> {
    raw.iter().map(|id| DocumentId::try_new(*id)).collect()
}
