//! Structured query audit logging

mod jsonl_logger;

pub use jsonl_logger::JsonlQueryLogger;
