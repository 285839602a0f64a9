//! HTTP adapters for the retrieval and theme services

mod retrieval;
mod themes;
mod wire;

#[cfg(test)]
mod test_server;

pub use retrieval::HttpRetrievalEngine;
pub use themes::HttpThemeSynthesizer;
