//! Query subdomain: what a caller asks for and what comes back.
//!
//! - [`request`]: [`QueryRequest`](request::QueryRequest) and [`CitationLevel`](request::CitationLevel)
//! - [`scope`]: [`ResolvedScope`](scope::ResolvedScope), the effective document restriction
//! - [`evidence`]: opaque [`Match`](evidence::Match) and [`Theme`](evidence::Theme) records
//! - [`result`]: [`QueryResult`](result::QueryResult), [`QuerySettings`](result::QuerySettings), [`ThemeOutcome`](result::ThemeOutcome)

pub mod evidence;
pub mod request;
pub mod result;
pub mod scope;
