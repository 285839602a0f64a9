//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod document_catalog;
pub mod progress;
pub mod query_logger;
pub mod retrieval_engine;
pub mod theme_synthesizer;
