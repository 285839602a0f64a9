//! Core domain concepts shared across all subdomains.
//!
//! - [`query_text::QueryText`]: a validated natural-language query
//! - [`document::DocumentId`] / [`document::DocumentRef`]: catalog identity
//! - [`error::DomainError`]: domain-level errors

pub mod document;
pub mod error;
pub mod query_text;
