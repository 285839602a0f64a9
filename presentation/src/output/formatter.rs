//! Output formatter trait

use docquery_domain::{OutputFormat, QueryResult};

/// Trait for formatting query results
pub trait OutputFormatter {
    /// Format the complete result: settings, matches and themes
    fn format(&self, result: &QueryResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &QueryResult) -> String;

    /// Format the matches only
    fn format_matches_only(&self, result: &QueryResult) -> String;

    /// Dispatch on the selected output format
    fn render(&self, result: &QueryResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Matches => self.format_matches_only(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
