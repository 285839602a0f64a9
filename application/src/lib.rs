//! Application layer for docquery
//!
//! This crate contains the query pipeline use cases, port definitions and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QueryDefaults;
pub use ports::{
    document_catalog::{CatalogError, CatalogSession, DocumentCatalog},
    progress::{NoQueryProgress, QueryProgressNotifier},
    query_logger::{NoQueryLogger, QueryEvent, QueryLogger},
    retrieval_engine::{RetrievalEngine, RetrievalError, RetrievalQuery},
    theme_synthesizer::{SynthesisError, ThemeSynthesizer},
};
pub use use_cases::assemble_response::assemble_response;
pub use use_cases::resolve_scope::ScopeResolver;
pub use use_cases::retrieve_matches::RetrievalDelegate;
pub use use_cases::run_query::{RunQueryError, RunQueryUseCase};
pub use use_cases::synthesize_themes::ThemeDelegate;
