//! Opaque evidence records produced by external subsystems.
//!
//! [`Match`] comes from the retrieval engine and [`Theme`] from theme
//! synthesis. Orchestration never builds or edits them; it only counts and
//! forwards, so both wrap the raw JSON value and serialize transparently.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One ranked piece of retrieved evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Match(Value);

impl Match {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Match {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A synthesized summary grouping related matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(Value);

impl Theme {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Theme {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_is_transparent() {
        let raw = json!({"document_id": 1, "text": "Revenue grew", "score": 0.91});
        let m = Match::new(raw.clone());
        assert_eq!(serde_json::to_value(&m).unwrap(), raw);
        let back: Match = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(back.as_value(), &raw);
    }

    #[test]
    fn test_theme_accepts_any_json() {
        let theme: Theme = serde_json::from_str("\"cost pressure\"").unwrap();
        assert_eq!(theme.as_value(), &json!("cost pressure"));
    }
}
