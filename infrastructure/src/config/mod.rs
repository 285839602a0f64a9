//! Configuration file loading for docquery
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `DOCQUERY_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./docquery.toml` or `./.docquery.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/docquery/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_RETRIEVAL_TIMEOUT_SECS, DEFAULT_THEMES_TIMEOUT_SECS, FileCatalogConfig, FileConfig,
    FileDefaultsConfig, FileLoggingConfig, FileOutputConfig, FileServiceConfig,
};
pub use loader::ConfigLoader;
