//! Presentation layer for docquery
//!
//! This crate contains CLI definitions, request binding, output formatters
//! and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg};
pub use cli::request::{RequestBindError, RequestFile, bind_request};
pub use config::OutputConfig;
pub use output::{console::ConsoleFormatter, formatter::OutputFormatter};
pub use progress::reporter::ProgressReporter;
