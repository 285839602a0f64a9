//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod assemble_response;
pub mod resolve_scope;
pub mod retrieve_matches;
pub mod run_query;
pub mod synthesize_themes;

#[cfg(test)]
pub(crate) mod test_support;
