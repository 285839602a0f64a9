//! Presentation-level configuration
//!
//! Decides how a result is shown: format, color and whether progress is
//! drawn.

use docquery_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Draw stage progress on stderr
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Combine configured and command line settings.
    ///
    /// A format given on the command line wins over the configured one.
    /// Progress is off when `quiet` is set or the output is JSON.
    pub fn resolve(
        configured_format: Option<OutputFormat>,
        cli_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        let format = cli_format.or(configured_format).unwrap_or_default();
        Self {
            format,
            color,
            show_progress: !quiet && format != OutputFormat::Json,
        }
    }
}
