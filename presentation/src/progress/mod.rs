//! Progress reporting for query runs

pub mod reporter;
