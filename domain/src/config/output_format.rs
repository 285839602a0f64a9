//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Settings, matches and themes (default)
    #[default]
    Full,
    /// Only the ranked matches
    Matches,
    /// The raw result as JSON
    Json,
}
