//! Domain layer for docquery
//!
//! This crate contains the value objects and entities of query
//! orchestration. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Query request**: query text plus relevance, citation and theme settings,
//!   optionally restricted to a set of documents
//! - **Scope**: the documents a query is restricted to; unscoped means the
//!   whole corpus
//! - **Match / Theme**: opaque evidence records owned by the retrieval and
//!   theme-synthesis subsystems
//! - **Query result**: matches, themes (or their absence) and a normalized
//!   echo of the effective settings

pub mod config;
pub mod core;
pub mod orchestration;
pub mod query;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    document::{DocumentId, DocumentRef},
    error::DomainError,
    query_text::QueryText,
};
pub use orchestration::entities::{QueryRun, RunState, Stage};
pub use query::{
    evidence::{Match, Theme},
    request::{CitationLevel, DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_THEME_COUNT, QueryRequest},
    result::{QueryResult, QuerySettings, ThemeOutcome},
    scope::ResolvedScope,
};
