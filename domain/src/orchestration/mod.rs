//! Pipeline stages and run state for query orchestration.

pub mod entities;
