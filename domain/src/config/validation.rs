//! Structured configuration issues.
//!
//! Configuration validation never fails outright; it returns every issue it
//! finds with a severity so the caller decides whether to stop.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required field is empty or absent.
    MissingValue { field: String },
    /// A string field does not name a known variant.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric field is outside its usable range.
    OutOfRange { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let code = ConfigIssueCode::MissingValue {
            field: "retrieval.endpoint".to_string(),
        };
        assert!(ConfigIssue::error(code.clone(), "x").is_error());
        assert!(!ConfigIssue::warning(code, "x").is_error());
    }

    #[test]
    fn test_display() {
        let issue = ConfigIssue::warning(
            ConfigIssueCode::OutOfRange {
                field: "defaults.relevance_threshold".to_string(),
                value: "1.5".to_string(),
            },
            "defaults.relevance_threshold is outside [0, 1]",
        );
        assert_eq!(
            issue.to_string(),
            "warning: defaults.relevance_threshold is outside [0, 1]"
        );
    }
}
