//! Console output formatter for query results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use docquery_domain::{Match, QueryResult, QuerySettings};
use serde_json::Value;

/// Formats query results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn settings_block(settings: &QuerySettings) -> String {
        let mut lines = vec![
            format!("  relevance threshold: {}", settings.relevance_threshold),
            format!("  citation level:      {}", settings.citation_level),
            format!(
                "  advanced mode:       {}",
                if settings.advanced_mode { "on" } else { "off" }
            ),
            format!(
                "  themes:              {}",
                match settings.theme_count {
                    Some(count) => format!("up to {}", count),
                    None => "off".to_string(),
                }
            ),
        ];
        lines.push(format!(
            "  documents:           {}",
            match settings.selected_document_count {
                Some(count) => format!("{} selected", count),
                None => "all".to_string(),
            }
        ));
        lines.join("\n")
    }

    fn matches_block(matches: &[Match]) -> String {
        if matches.is_empty() {
            return format!("{}\n", "No matches.".dimmed());
        }

        let mut output = String::new();
        for (i, m) in matches.iter().enumerate() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── Match {} ──", i + 1).yellow().bold(),
                Self::indent(&Self::pretty(m.as_value()), "  ")
            ));
        }
        output
    }

    /// Strings print as-is; anything else as pretty JSON
    fn pretty(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &QueryResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Query Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n\n", "Query:".cyan().bold(), result.query));
        output.push_str(&format!("{}\n", "Settings:".cyan().bold()));
        output.push_str(&Self::settings_block(&result.settings));
        output.push('\n');

        output.push_str(&Self::section_header(&format!(
            "Matches ({})",
            result.match_count()
        )));
        output.push_str(&Self::matches_block(&result.matches));

        output.push_str(&Self::section_header("Themes"));
        match &result.themes {
            None => output.push_str(&format!("{}\n", "not requested".dimmed())),
            Some(themes) if themes.is_empty() => {
                output.push_str(&format!("{}\n", "none found".dimmed()))
            }
            Some(themes) => {
                for theme in themes {
                    let text = Self::pretty(theme.as_value());
                    let mut lines = text.lines();
                    if let Some(first) = lines.next() {
                        output.push_str(&format!("  {} {}\n", "*".green(), first));
                    }
                    for line in lines {
                        output.push_str(&format!("    {}\n", line));
                    }
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_json(&self, result: &QueryResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_matches_only(&self, result: &QueryResult) -> String {
        let mut output = Self::matches_block(&result.matches);
        if output.starts_with('\n') {
            output.remove(0);
        }
        output
    }
}
