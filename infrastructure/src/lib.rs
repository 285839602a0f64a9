//! Infrastructure layer for docquery
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.
//!
//! HTTP adapters for the retrieval and theme services are behind the `http`
//! feature.

pub mod catalog;
pub mod config;
#[cfg(feature = "http")]
pub mod http;
pub mod logging;
pub mod synthesis;

// Re-export commonly used types
pub use catalog::{InMemoryDocumentCatalog, JsonDocumentCatalog, UnconfiguredCatalog};
pub use config::{
    ConfigLoader, DEFAULT_RETRIEVAL_TIMEOUT_SECS, DEFAULT_THEMES_TIMEOUT_SECS, FileCatalogConfig,
    FileConfig, FileDefaultsConfig, FileLoggingConfig, FileOutputConfig, FileServiceConfig,
};
#[cfg(feature = "http")]
pub use http::{HttpRetrievalEngine, HttpThemeSynthesizer};
pub use logging::JsonlQueryLogger;
pub use synthesis::UnconfiguredThemeSynthesizer;
