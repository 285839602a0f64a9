//! CLI command definitions

use clap::{Parser, ValueEnum};
use docquery_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Settings, matches and themes
    Full,
    /// Only the ranked matches
    Matches,
    /// The result as JSON
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Matches => OutputFormat::Matches,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for docquery
#[derive(Parser, Debug)]
#[command(name = "docquery")]
#[command(author, version, about = "Query a document corpus, optionally grouped into themes")]
#[command(long_about = r#"
docquery runs a natural-language query against a document corpus.

A run has four stages:
1. Scope: document IDs (if any) are checked against the catalog
2. Retrieval: the retrieval service ranks matching passages
3. Themes: if requested, the matches are grouped into themes
4. Assembly: matches, themes and effective settings are returned

A failed theme stage never fails the query; the result then shows no themes.

Configuration files are loaded from (in priority order):
1. DOCQUERY_* environment variables
2. --config <path>       Explicit config file
3. ./docquery.toml       Project-level config
4. ~/.config/docquery/config.toml   Global config

Example:
  docquery "What drove inflation in Q3?"
  docquery -d 12 -d 40 --themes --theme-count 5 "supply chain risks"
  docquery --request request.json --no-themes -o json
"#)]
pub struct Cli {
    /// The query text (may come from --request instead)
    pub query: Option<String>,

    /// Restrict the query to a document (can be specified multiple times)
    #[arg(short = 'd', long = "document", value_name = "ID")]
    pub document_ids: Vec<i64>,

    /// Group matches into themes
    #[arg(short = 't', long, overrides_with = "no_themes")]
    pub themes: bool,

    /// Do not group matches into themes, even if configured
    #[arg(long, overrides_with = "themes")]
    pub no_themes: bool,

    /// Number of themes to ask for
    #[arg(long, value_name = "N")]
    pub theme_count: Option<u32>,

    /// Minimum relevance score for a match
    #[arg(long, value_name = "X")]
    pub threshold: Option<f64>,

    /// Enable the retrieval service's advanced mode
    #[arg(long, overrides_with = "no_advanced")]
    pub advanced: bool,

    /// Disable advanced mode, even if configured
    #[arg(long, overrides_with = "advanced")]
    pub no_advanced: bool,

    /// Citation granularity: document, paragraph or sentence
    #[arg(long, value_name = "LEVEL")]
    pub citation_level: Option<String>,

    /// Read the request body from a JSON file ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append query events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub query_log: Option<PathBuf>,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::try_parse_from([
            "docquery",
            "-d",
            "1",
            "-d",
            "2",
            "-t",
            "--theme-count",
            "5",
            "--threshold",
            "0.4",
            "--citation-level",
            "sentence",
            "-o",
            "json",
            "-vv",
            "inflation",
        ])
        .unwrap();

        assert_eq!(cli.query.as_deref(), Some("inflation"));
        assert_eq!(cli.document_ids, vec![1, 2]);
        assert!(cli.themes);
        assert_eq!(cli.theme_count, Some(5));
        assert_eq!(cli.threshold, Some(0.4));
        assert_eq!(cli.citation_level.as_deref(), Some("sentence"));
        assert_eq!(cli.output, Some(OutputFormatArg::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_query_is_optional() {
        let cli = Cli::try_parse_from(["docquery", "--request", "-"]).unwrap();
        assert!(cli.query.is_none());
        assert_eq!(cli.request, Some(PathBuf::from("-")));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_negative_flags_override_earlier_ones() {
        let cli =
            Cli::try_parse_from(["docquery", "-t", "--advanced", "--no-themes", "--no-advanced", "q"])
                .unwrap();
        assert!(!cli.themes);
        assert!(cli.no_themes);
        assert!(!cli.advanced);
        assert!(cli.no_advanced);

        let cli = Cli::try_parse_from(["docquery", "--no-themes", "-t", "q"]).unwrap();
        assert!(cli.themes);
        assert!(!cli.no_themes);
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        assert!(Cli::try_parse_from(["docquery", "-o", "yaml", "q"]).is_err());
    }
}
